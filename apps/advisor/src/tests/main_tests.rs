use super::*;

#[test]
fn recommend_keeps_raw_field_text() {
    let cli = Cli::try_parse_from([
        "advisor",
        "recommend",
        "--nitrogen",
        "90",
        "--phosphorus",
        "42",
        "--potassium",
        "lots",
        "--temperature",
        "-2.5",
        "--humidity",
        "82",
        "--ph",
        "6.5",
        "--rainfall",
        "202.9",
    ])
    .expect("parse");
    let Command::Recommend(form) = cli.command else {
        panic!("expected recommend");
    };
    assert_eq!(form.potassium, "lots");
    assert_eq!(form.temperature, "-2.5");
}

#[test]
fn recommend_requires_every_field() {
    let err = Cli::try_parse_from(["advisor", "recommend", "--nitrogen", "90"])
        .expect_err("missing fields");
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn global_flags_override_settings() {
    let cli = Cli::try_parse_from([
        "advisor",
        "report",
        "--base-url",
        "http://farm.example",
        "--download-dir",
        "out",
        "--timeout-secs",
        "9",
    ])
    .expect("parse");
    let mut settings = Settings::default();
    cli.apply_overrides(&mut settings);

    assert_eq!(settings.base_url, "http://farm.example");
    assert_eq!(settings.download_dir, PathBuf::from("out"));
    assert_eq!(settings.request_timeout_secs, Some(9));
    assert_eq!(settings.session_dir, Settings::default().session_dir);
}

#[test]
fn html_format_is_selectable() {
    let cli = Cli::try_parse_from(["advisor", "show", "--format", "html"]).expect("parse");
    assert_eq!(cli.format, Format::Html);
    assert!(matches!(cli.command, Command::Show));
}

#[test]
fn form_args_fill_every_input() {
    let cli = Cli::try_parse_from([
        "advisor",
        "recommend",
        "--nitrogen",
        "1",
        "--phosphorus",
        "2",
        "--potassium",
        "3",
        "--temperature",
        "4",
        "--humidity",
        "5",
        "--ph",
        "6",
        "--rainfall",
        "7",
    ])
    .expect("parse");
    let Command::Recommend(form) = cli.command else {
        panic!("expected recommend");
    };
    let inputs = form.into_inputs();
    for field in shared::domain::FormField::ALL {
        assert!(inputs.value(field).is_some(), "{field:?} missing");
    }
}
