use assert_cmd::Command;

pub fn logbook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("logbook").unwrap();
    cmd.env_remove("LOGBOOK_DIR");
    cmd
}
