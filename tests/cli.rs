mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use mockito::Server;
    use predicates::prelude::PredicateBooleanExt;
    use predicates::str::{contains, starts_with};

    use std::io::Write;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "statuscheck";

    fn input_file(contents: &str) -> Result<tempfile::NamedTempFile, std::io::Error> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        Ok(file)
    }

    fn statuscheck() -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("--no-config").arg("--no-progress");
        Ok(cmd)
    }

    #[test]
    fn test_output__when_no_infile_provided() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.assert().failure().stderr(contains(
            "error: the following required arguments were not provided:\n  <INFILE>",
        ));
        Ok(())
    }

    #[test]
    fn test_output__when_infile_missing() -> TestResult {
        let mut cmd = statuscheck()?;

        cmd.arg("this-file-does-not-exist.txt");

        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("Error: Input error"))
            .stderr(contains("this-file-does-not-exist.txt"));
        Ok(())
    }

    #[test]
    fn test_output__counts_every_line_but_skips_blank_ones() -> TestResult {
        // Port 1 on loopback refuses connections, so every probe errors out
        let file = input_file("127.0.0.1:1\n\n127.0.0.1:1/other\n")?;
        let mut cmd = statuscheck()?;

        cmd.arg(file.path()).args(["--timeout", "2"]);

        cmd.assert()
            .success()
            .stdout(contains("Generated 2 URLs from original list of 3"))
            .stdout(contains("Checking all URLs for status codes:"));
        Ok(())
    }

    #[test]
    fn test_output__when_every_probe_errors() -> TestResult {
        let file = input_file("127.0.0.1:1\n")?;
        let mut cmd = statuscheck()?;

        cmd.arg(file.path()).args(["--timeout", "2"]);

        cmd.assert()
            .success()
            .stdout(contains("Status Code:").not());
        Ok(())
    }

    #[tokio::test]
    async fn test_output__groups_by_status_line() -> TestResult {
        let mut server = Server::new_async().await;
        let _m = server.mock("GET", "/").with_status(200).create_async().await;
        let host = server.host_with_port();
        let file = input_file(&format!("{host}\n"))?;
        let mut cmd = statuscheck()?;

        cmd.arg(file.path());

        cmd.assert()
            .success()
            .stdout(contains(format!(
                "\nStatus Code: 200 OK\nhttp://{host}\n\n"
            )));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__strips_scheme_and_appends_path() -> TestResult {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/health")
            .with_status(503)
            .create_async()
            .await;
        let host = server.host_with_port();
        let file = input_file(&format!("  http://{host}  \n"))?;
        let mut cmd = statuscheck()?;

        cmd.arg(file.path()).args(["-p", "/health"]);

        cmd.assert()
            .success()
            .stdout(contains("Appending path: /health"))
            .stdout(contains("Generated 1 URLs from original list of 1"))
            .stdout(contains(format!(
                "Status Code: 503 Service Unavailable\nhttp://{host}/health\n"
            )));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__https_doubles_the_candidates() -> TestResult {
        let mut server = Server::new_async().await;
        let _m = server.mock("GET", "/").with_status(200).create_async().await;
        let host = server.host_with_port();
        let file = input_file(&format!("{host}\n"))?;
        let mut cmd = statuscheck()?;

        // The mock server only speaks plain http, so the https probe errors
        cmd.arg(file.path()).args(["-s", "-t", "3"]);

        cmd.assert()
            .success()
            .stdout(contains("Generated 2 URLs from original list of 1"))
            .stdout(contains(format!("Status Code: 200 OK\nhttp://{host}\n")))
            .stdout(contains(format!("https://{host}")).not());
        Ok(())
    }

    #[tokio::test]
    async fn test_outfile__receives_the_report() -> TestResult {
        let mut server = Server::new_async().await;
        let _m = server.mock("GET", "/").with_status(404).create_async().await;
        let host = server.host_with_port();
        let file = input_file(&format!("{host}\n"))?;
        let dir = tempfile::tempdir()?;
        let outfile = dir.path().join("report.txt");
        let mut cmd = statuscheck()?;

        cmd.arg(file.path()).arg("-o").arg(&outfile);

        cmd.assert()
            .success()
            .stdout(contains("Generated 1 URLs from original list of 1"))
            .stdout(contains("Status Code:").not());
        assert_eq!(
            std::fs::read_to_string(&outfile)?,
            format!("Status Code: 404 Not Found\nhttp://{host}\n\n")
        );
        Ok(())
    }

    #[test]
    fn test_outfile__when_unwritable() -> TestResult {
        let file = input_file("127.0.0.1:1\n")?;
        let dir = tempfile::tempdir()?;
        let outfile = dir.path().join("missing-dir").join("report.txt");
        let mut cmd = statuscheck()?;

        cmd.arg(file.path()).arg("--outfile").arg(&outfile);

        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("Error: Output error"));
        assert!(!outfile.exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_format__json() -> TestResult {
        let mut server = Server::new_async().await;
        let _m = server.mock("GET", "/").with_status(204).create_async().await;
        let host = server.host_with_port();
        let file = input_file(&format!("{host}\n"))?;
        let mut cmd = statuscheck()?;

        cmd.arg(file.path()).args(["--format", "json"]);

        let output = cmd.assert().success().get_output().stdout.clone();
        let report: serde_json::Value = serde_json::from_slice(&output)?;

        assert_eq!(report["total_probed"], 1);
        assert_eq!(report["errors"], 0);
        assert_eq!(
            report["statuses"]["204 No Content"][0],
            format!("http://{host}")
        );
        Ok(())
    }

    #[test]
    fn test_quiet__suppresses_console_messages() -> TestResult {
        let file = input_file("127.0.0.1:1\n")?;
        let mut cmd = statuscheck()?;

        cmd.arg(file.path()).args(["-q", "-t", "2"]);

        cmd.assert()
            .success()
            .stdout(contains("Generated").not())
            .stdout(contains("Checking all URLs").not());
        Ok(())
    }

    #[test]
    fn test_timeout__rejects_zero() -> TestResult {
        let file = input_file("example.com\n")?;
        let mut cmd = statuscheck()?;

        cmd.arg(file.path()).args(["--timeout", "0"]);

        cmd.assert()
            .failure()
            .stderr(contains("Timeout cannot be 0"));
        Ok(())
    }

    #[test]
    fn test_config__file_values_are_used() -> TestResult {
        let file = input_file("127.0.0.1:1\n")?;
        let mut config = tempfile::NamedTempFile::new()?;
        config.write_all(b"path = \"/from-config\"\ntimeout = 2\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg(file.path())
            .arg("--config")
            .arg(config.path())
            .arg("--no-progress");

        cmd.assert()
            .success()
            .stdout(contains("Appending path: /from-config"));
        Ok(())
    }

    #[test]
    fn test_config__invalid_toml() -> TestResult {
        let file = input_file("example.com\n")?;
        let mut config = tempfile::NamedTempFile::new()?;
        config.write_all(b"timeout = [not toml")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg(file.path()).arg("--config").arg(config.path());

        cmd.assert().failure().stderr(starts_with("Error:"));
        Ok(())
    }

    #[test]
    fn test_config__broken_file_in_working_directory() -> TestResult {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(".statuscheck.toml"), "timeout = [not toml")?;
        std::fs::write(dir.path().join("hosts.txt"), "127.0.0.1:1\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path()).arg("hosts.txt").arg("--no-progress");

        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("Error: Configuration error"))
            .stderr(contains("Invalid TOML"));
        Ok(())
    }

    #[test]
    fn test_config__invalid_value_in_working_directory() -> TestResult {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(".statuscheck.toml"), "timeout = 0\n")?;
        std::fs::write(dir.path().join("hosts.txt"), "127.0.0.1:1\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path()).arg("hosts.txt").arg("--no-progress");

        cmd.assert()
            .failure()
            .stderr(contains("Timeout cannot be 0"));
        Ok(())
    }

    #[test]
    fn test_config__file_in_working_directory_is_used() -> TestResult {
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join(".statuscheck.toml"),
            "path = \"/from-cwd\"\ntimeout = 2\n",
        )?;
        std::fs::write(dir.path().join("hosts.txt"), "127.0.0.1:1\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path()).arg("hosts.txt").arg("--no-progress");

        cmd.assert()
            .success()
            .stdout(contains("Appending path: /from-cwd"));
        Ok(())
    }

    #[tokio::test]
    async fn test_format__json_to_outfile_keeps_console_lines() -> TestResult {
        let mut server = Server::new_async().await;
        let _m = server.mock("GET", "/").with_status(200).create_async().await;
        let host = server.host_with_port();
        let file = input_file(&format!("{host}\n"))?;
        let dir = tempfile::tempdir()?;
        let outfile = dir.path().join("report.json");
        let mut cmd = statuscheck()?;

        cmd.arg(file.path())
            .args(["--format", "json", "-o"])
            .arg(&outfile);

        cmd.assert()
            .success()
            .stdout(contains("Generated 1 URLs from original list of 1"))
            .stdout(contains("Checking all URLs for status codes:"));
        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&outfile)?)?;
        assert_eq!(report["statuses"]["200 OK"][0], format!("http://{host}"));
        Ok(())
    }

    #[test]
    fn test_completion_generate__bash() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.args(["completion-generate", "bash"]);

        cmd.assert().success().stdout(contains("statuscheck"));
        Ok(())
    }
}
