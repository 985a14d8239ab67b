//! End-to-end resolution tests: write a real configuration file to disk,
//! load it through the public API and inspect the resolved snapshot.

use std::path::Path;

use http_configuration::configuration::{
    ConfigurationResolutionError,
    Environment,
    HttpConfiguration,
    RuntimeMode,
    SameSite,
    SignatureAlgorithm,
    PRIMARY_CONFIGURATION_RESOURCE,
};


fn write_configuration(root: &Path, contents: &str) -> std::path::PathBuf {
    let path = root.join(PRIMARY_CONFIGURATION_RESOURCE);
    std::fs::write(&path, contents).unwrap();
    path
}

fn development(root: &Path) -> Environment {
    Environment::new(root, RuntimeMode::Development)
}

fn production(root: &Path) -> Environment {
    Environment::new(root, RuntimeMode::Production)
}

// 64 ASCII characters, 512 bits: strong enough for every supported algorithm.
const STRONG_SECRET: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";


#[test]
fn full_configuration_file_resolves() {
    let root = tempfile::tempdir().unwrap();

    let path = write_configuration(
        root.path(),
        &format!(
            r#"
context = "/app"
mime_types = "txt=text/plain\nhtml=text/html"

[secret]
key = "{STRONG_SECRET}"
provider = "vault"

[parser]
max_memory_buffer = 1024
max_disk_buffer = 2048
allow_empty_files = true

[action_composition]
controller_annotations_first = true

[cookies]
strict = false

[session]
cookie_name = "MY_SESSION"
secure = true
max_age_seconds = 3600
domain = "example.org"
same_site = "strict"
partitioned = true

[session.jwt]
signature_algorithm = "HS512"
expires_after_seconds = 600
clock_skew_seconds = 10
data_claim = "payload"

[flash]
cookie_name = "MY_FLASH"
"#
        ),
    );

    let configuration = HttpConfiguration::load_from_path(&path, &production(root.path())).unwrap();

    assert_eq!(configuration.context, "/app");
    assert_eq!(configuration.secret.secret, STRONG_SECRET);
    assert_eq!(configuration.secret.provider.as_deref(), Some("vault"));

    assert_eq!(configuration.parser.max_memory_buffer, 1024);
    assert_eq!(configuration.parser.max_disk_buffer, 2048);
    assert!(configuration.parser.allow_empty_files);

    assert!(configuration.action_composition.controller_annotations_first);
    assert!(!configuration.action_composition.execute_action_creator_first);

    assert!(!configuration.cookies.strict);

    assert_eq!(configuration.session.cookie_name, "MY_SESSION");
    assert!(configuration.session.secure);
    assert_eq!(
        configuration.session.max_age,
        Some(std::time::Duration::from_secs(3600))
    );
    assert_eq!(configuration.session.domain.as_deref(), Some("example.org"));
    assert_eq!(configuration.session.same_site, Some(SameSite::Strict));
    assert!(configuration.session.partitioned);
    assert_eq!(
        configuration.session.jwt.signature_algorithm,
        SignatureAlgorithm::Hs512
    );
    assert_eq!(
        configuration.session.jwt.expires_after,
        Some(std::time::Duration::from_secs(600))
    );
    assert_eq!(
        configuration.session.jwt.clock_skew,
        std::time::Duration::from_secs(10)
    );
    assert_eq!(configuration.session.jwt.data_claim, "payload");

    assert_eq!(configuration.flash.cookie_name, "MY_FLASH");
    assert_eq!(
        configuration.flash.jwt.signature_algorithm,
        SignatureAlgorithm::Hs256
    );

    assert_eq!(configuration.mime_types.mime_type("txt"), Some("text/plain"));
    assert_eq!(configuration.mime_types.mime_type("html"), Some("text/html"));
    assert_eq!(configuration.mime_types.len(), 2);

    let file_path = configuration.file_path.expect("loaded from a file");
    assert!(file_path.is_absolute());
}

#[test]
fn empty_document_resolves_to_defaults_in_development() {
    let root = tempfile::tempdir().unwrap();

    let configuration =
        HttpConfiguration::from_toml_str("", &development(root.path())).unwrap();

    assert_eq!(configuration.context, "/");
    assert_eq!(configuration.session.cookie_name, "SESSION");
    assert_eq!(configuration.flash.cookie_name, "FLASH");
    assert_eq!(configuration.session.same_site, Some(SameSite::Lax));
    assert!(configuration.session.http_only);
    assert!(configuration.cookies.strict);
    // The derived development secret: two hex-encoded MD5 digests.
    assert_eq!(configuration.secret.byte_length(), 64);
    assert_eq!(
        configuration.mime_types.mime_type("json"),
        Some("application/json")
    );
}

#[test]
fn production_requires_an_explicit_secret() {
    let root = tempfile::tempdir().unwrap();
    let environment = production(root.path());

    for document in [
        "",
        "[secret]\nkey = \"\"",
        "[secret]\nkey = \"changeme\"",
    ] {
        let error = HttpConfiguration::from_toml_str(document, &environment)
            .expect_err("production must refuse an unset or placeholder secret");

        assert!(matches!(
            error,
            ConfigurationResolutionError::MissingApplicationSecret { .. }
        ));
    }
}

#[test]
fn development_never_requires_a_secret() {
    let root = tempfile::tempdir().unwrap();

    for document in [
        "",
        "[secret]\nkey = \"\"",
        "[secret]\nkey = \"changeme\"",
    ] {
        assert!(HttpConfiguration::from_toml_str(document, &development(root.path())).is_ok());
    }
}

#[test]
fn derived_development_secret_is_stable_across_loads() {
    let root = tempfile::tempdir().unwrap();
    let path = write_configuration(root.path(), "context = \"/\"");

    let environment = development(root.path());

    let first = HttpConfiguration::load_from_path(&path, &environment).unwrap();
    let second = HttpConfiguration::load_from_path(&path, &environment).unwrap();

    assert_eq!(first.secret.secret, second.secret.secret);
}

#[test]
fn derived_development_secrets_differ_between_applications() {
    let first_root = tempfile::tempdir().unwrap();
    let second_root = tempfile::tempdir().unwrap();
    let first_path = write_configuration(first_root.path(), "");
    let second_path = write_configuration(second_root.path(), "");

    let first =
        HttpConfiguration::load_from_path(&first_path, &development(first_root.path())).unwrap();
    let second =
        HttpConfiguration::load_from_path(&second_path, &development(second_root.path())).unwrap();

    assert_ne!(first.secret.secret, second.secret.secret);
}

#[test]
fn weak_secret_is_rejected_per_section() {
    let root = tempfile::tempdir().unwrap();
    let environment = production(root.path());

    // 32 bytes: strong enough for HS256, too weak for HS512.
    let thirty_two_byte_secret = "0123456789abcdef0123456789abcdef";

    let accepted = format!("[secret]\nkey = \"{thirty_two_byte_secret}\"");
    assert!(HttpConfiguration::from_toml_str(&accepted, &environment).is_ok());

    let rejected = format!(
        "[secret]\nkey = \"{thirty_two_byte_secret}\"\n\n[flash.jwt]\nsignature_algorithm = \"HS512\""
    );
    let error = HttpConfiguration::from_toml_str(&rejected, &environment)
        .expect_err("a 256-bit secret must be rejected for HS512");

    assert!(matches!(
        error,
        ConfigurationResolutionError::WeakSecret {
            key,
            algorithm: SignatureAlgorithm::Hs512,
            required_bits: 512,
            actual_bits: 256,
        } if key == "flash.jwt.signature_algorithm"
    ));
}

#[test]
fn secrets_shorter_than_32_bytes_are_rejected_for_hs256() {
    let root = tempfile::tempdir().unwrap();

    // The secret below is 31 bytes, one short of the 256-bit minimum.
    let document = "[secret]\nkey = \"only31bytes-0123456789abcdefghi\"";

    let error = HttpConfiguration::from_toml_str(document, &production(root.path()))
        .expect_err("a 31-byte secret must be rejected for HS256");

    assert!(matches!(
        error,
        ConfigurationResolutionError::WeakSecret {
            algorithm: SignatureAlgorithm::Hs256,
            required_bits: 256,
            actual_bits: 248,
            ..
        }
    ));
}

#[test]
fn unknown_signature_algorithm_is_rejected() {
    let root = tempfile::tempdir().unwrap();

    let document = "[session.jwt]\nsignature_algorithm = \"ROT13\"";
    let error = HttpConfiguration::from_toml_str(document, &development(root.path()))
        .expect_err("unknown algorithms must be rejected");

    assert!(matches!(
        error,
        ConfigurationResolutionError::InvalidAlgorithm { value, .. } if value == "ROT13"
    ));
}

#[test]
fn forbidden_mimetype_key_always_fails() {
    let root = tempfile::tempdir().unwrap();

    let documents = [
        "mimetype = \"anything\"".to_string(),
        // Even a fully valid configuration fails if the removed key appears.
        format!("mimetype = \"x\"\n\n[secret]\nkey = \"{STRONG_SECRET}\""),
    ];

    for document in &documents {
        let error = HttpConfiguration::from_toml_str(document, &development(root.path()))
            .expect_err("the removed mimetype key must fail resolution");

        assert!(matches!(
            error,
            ConfigurationResolutionError::ForbiddenKey { key } if key == "mimetype"
        ));
    }
}

#[test]
fn deprecated_application_secret_is_honored_when_new_key_is_absent() {
    let root = tempfile::tempdir().unwrap();

    let document = format!("application_secret = \"{STRONG_SECRET}\"");
    let configuration =
        HttpConfiguration::from_toml_str(&document, &production(root.path())).unwrap();

    assert_eq!(configuration.secret.secret, STRONG_SECRET);
}

#[test]
fn new_secret_key_wins_over_the_deprecated_one() {
    let root = tempfile::tempdir().unwrap();

    let legacy_secret = "legacy-legacy-legacy-legacy-legacy-legacy-legacy";
    let document = format!(
        "application_secret = \"{legacy_secret}\"\n\n[secret]\nkey = \"{STRONG_SECRET}\""
    );

    let configuration =
        HttpConfiguration::from_toml_str(&document, &production(root.path())).unwrap();

    assert_eq!(configuration.secret.secret, STRONG_SECRET);
}

#[test]
fn invalid_context_path_is_rejected() {
    let root = tempfile::tempdir().unwrap();

    let error = HttpConfiguration::from_toml_str(
        "context = \"app\"",
        &development(root.path()),
    )
    .expect_err("a context path without a leading slash must be rejected");

    assert!(matches!(
        error,
        ConfigurationResolutionError::InvalidPath { key, value }
            if key == "context" && value == "app"
    ));
}

#[test]
fn unrecognized_same_site_degrades_to_absent() {
    let root = tempfile::tempdir().unwrap();

    let configuration = HttpConfiguration::from_toml_str(
        "[session]\nsame_site = \"sideways\"",
        &development(root.path()),
    )
    .unwrap();

    assert_eq!(configuration.session.same_site, None);
}

#[test]
fn missing_configuration_file_is_reported() {
    let root = tempfile::tempdir().unwrap();

    let error = HttpConfiguration::load_from_path(
        root.path().join("nope.toml"),
        &development(root.path()),
    )
    .expect_err("a missing file must be reported");

    assert!(matches!(
        error,
        ConfigurationResolutionError::UnreadableConfigurationFile { .. }
    ));
}

#[test]
fn malformed_toml_is_reported() {
    let root = tempfile::tempdir().unwrap();

    let error = HttpConfiguration::from_toml_str("context = [", &development(root.path()))
        .expect_err("malformed TOML must be reported");

    assert!(matches!(
        error,
        ConfigurationResolutionError::UnparsableConfigurationFile { .. }
    ));
}
