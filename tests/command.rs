mod test_utilities;
use predicates::str;
use test_utilities::*;

#[test]
fn no_arguments_is_usage_error() {
    imgfit_cmd()
        .assert()
        .failure()
        .code(2)
        .stdout(str::is_empty())
        .stderr(str::contains("--input"));
}

#[test]
fn quality_out_of_range_is_rejected() {
    imgfit_cmd()
        .args(["--quality", "0", "--input", "a.png", "--output", "b.png"])
        .assert()
        .failure()
        .code(2)
        .stdout(str::is_empty());
}

#[test]
fn non_numeric_width_is_rejected() {
    imgfit_cmd()
        .args(["--width", "wide", "--input", "a.png", "--output", "b.png"])
        .assert()
        .failure()
        .code(2)
        .stdout(str::is_empty());
}

#[test]
fn gen_config_prints_stock_config() {
    imgfit_cmd()
        .arg("--gen-config")
        .assert()
        .success()
        .stdout(str::contains("small_file_threshold = 150000"))
        .stdout(str::contains("quality = 85"));
}

#[test]
fn invalid_config_is_usage_error() {
    let dir = temp_dir();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[jpeg]\nquality = 0\n").unwrap();

    imgfit_cmd()
        .args(["--config", path_arg(&config), "--input", "a.png", "--output", "b.png"])
        .assert()
        .failure()
        .code(2)
        .stdout(str::is_empty())
        .stderr(str::contains("jpeg.quality"));
}

#[test]
fn version_flag() {
    imgfit_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(str::starts_with("imgfit "));
}
