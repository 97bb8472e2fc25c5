use super::vcatalog;
use predicates::prelude::*;
use vcatalog_cli::test_utils::GradleProjectFixture;

#[test]
fn test_no_argument_outside_gradle_project() {
    let dir = GradleProjectFixture::bare();

    vcatalog(&dir)
        .arg("generate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a Gradle project"));

    assert!(!dir.path().join("gradle").exists());
}

#[test]
fn test_explicit_path_not_a_gradle_project() {
    let dir = GradleProjectFixture::bare();

    vcatalog(&dir)
        .args(["generate", "./path/to/gradle/project"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a Gradle project"));
}

#[test]
fn test_reject_extra_argument() {
    let project = GradleProjectFixture::new();

    vcatalog(&project)
        .arg("generate")
        .arg(project.path())
        .arg("extra-")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires at most one arg"));

    assert!(!project.catalog_path().exists());
}

#[test]
fn test_empty_project_generates_empty_catalog() {
    let project = GradleProjectFixture::new();

    vcatalog(&project)
        .arg("generate")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("libs.versions.toml"));

    assert_eq!(project.read_catalog(), "");
}

#[test]
fn test_working_directory_is_default_root() {
    let project = GradleProjectFixture::new();
    project.write("build.gradle", r#"api("foo:foo:1.0")"#);

    vcatalog(&project).arg("generate").assert().success();

    assert!(project.read_catalog().contains("foo-foo"));
}

#[test]
fn test_skip_top_level_settings_file() {
    let project = GradleProjectFixture::new();
    project.write(
        "build.gradle",
        r#"
        implementation "foo.sub:No-Version"
        classpath 'software.amazon.awssdk:s3'
        api("foo:foo:1.0-M4")
"#,
    );
    project.write("settings.gradle.kts", r#"implementation("ignore:ignore:1.0")"#);
    project.write("foo/build.gradle", r#"testImplementation("bar:bar:0.1")"#);
    project.write("foo/settings.gradle.kts", r#"implementation("ok:ok:2.0")"#);
    project.write(
        "too/much/deep/should/be/ignored/build.gradle",
        r#"testImplementation("no:no:0.1")"#,
    );

    vcatalog(&project).arg("generate").arg(project.path()).assert().success();

    let expected = r#"[libraries]
bar-bar = { group = "bar", name = "bar", version = "0.1" }
foo-foo = { group = "foo", name = "foo", version = "1.0-M4" }
foo-sub-no-version = { group = "foo.sub", name = "No-Version", version = "FIXME" }
ok-ok = { group = "ok", name = "ok", version = "2.0" }
software-amazon-awssdk-s3 = { group = "software.amazon.awssdk", name = "s3", version = "FIXME" }
"#;
    assert_eq!(project.read_catalog(), expected);
}

#[test]
fn test_variable_support() {
    let project = GradleProjectFixture::new();
    project.write(
        "build.gradle",
        r#"
        val fooVersion = "1.0"
        api("foo:foo:$fooVersion")
        api("bar:bar:${barVersion}")
"#,
    );
    project.write("foo/build.gradle", r#"testImplementation("foo:foo-ext:${fooVersion}")"#);

    vcatalog(&project).arg("generate").arg(project.path()).assert().success();

    let expected = r#"[versions]
barVersion = "FIXME"
fooVersion = "1.0"

[libraries]
bar-bar = { group = "bar", name = "bar", version.ref = "barVersion" }
foo-foo = { group = "foo", name = "foo", version.ref = "fooVersion" }
foo-foo-ext = { group = "foo", name = "foo-ext", version.ref = "fooVersion" }
"#;
    assert_eq!(project.read_catalog(), expected);
}

#[test]
fn test_plugins_support() {
    let project = GradleProjectFixture::new();
    project.write(
        "build.gradle",
        r#"
        val androidPluginVersion = "8.9.0"
        id("com.android.application") version "${androidPluginVersion}" apply false
        id("com.android.library") version "$androidPluginVersion"
        id("org.jetbrains.kotlin.android") version "2.1.10" apply false
        id("foo.bar-buz") version "2.2.20-123"
"#,
    );

    vcatalog(&project).arg("generate").arg(project.path()).assert().success();

    let expected = r#"[versions]
androidPluginVersion = "8.9.0"

[plugins]
com-android-application = { id = "com.android.application", version.ref = "androidPluginVersion" }
com-android-library = { id = "com.android.library", version.ref = "androidPluginVersion" }
foo-bar-buz = { id = "foo.bar-buz", version = "2.2.20-123" }
org-jetbrains-kotlin-android = { id = "org.jetbrains.kotlin.android", version = "2.1.10" }
"#;
    assert_eq!(project.read_catalog(), expected);
}

#[test]
fn test_max_depth_flag_and_env() {
    let project = GradleProjectFixture::new();
    project.write("a/b/c/build.gradle", r#"api("deep:deep:1.0")"#);

    vcatalog(&project).arg("generate").assert().success();
    assert_eq!(project.read_catalog(), "");

    vcatalog(&project).env("VCATALOG_MAX_DEPTH", "3").arg("generate").assert().success();
    assert!(project.read_catalog().contains("deep-deep"));
}

#[test]
fn test_config_file_excludes_directories() {
    let project = GradleProjectFixture::new();
    project.write("app/build.gradle.kts", r#"implementation("app:app:1.0")"#);
    project.write("buildSrc/build.gradle.kts", r#"implementation("tool:tool:1.0")"#);
    let config = project.write("vcatalog.toml", "exclude-dirs = [\"buildSrc\"]\n");

    vcatalog(&project).arg("--config").arg(&config).arg("generate").assert().success();

    let catalog = project.read_catalog();
    assert!(catalog.contains("app-app"));
    assert!(!catalog.contains("tool-tool"));
}

#[test]
fn test_missing_config_file_fails() {
    let project = GradleProjectFixture::new();

    vcatalog(&project)
        .args(["--config", "missing.toml", "generate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));

    assert!(!project.catalog_path().exists());
}

#[test]
fn test_dry_run_prints_without_writing() {
    let project = GradleProjectFixture::new();
    project.write("build.gradle", r#"api("foo:foo:1.0")"#);

    vcatalog(&project)
        .args(["generate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[libraries]\n"))
        .stdout(predicate::str::contains(
            r#"foo-foo = { group = "foo", name = "foo", version = "1.0" }"#,
        ));

    assert!(!project.catalog_path().exists());
}

#[test]
fn test_quiet_suppresses_summary() {
    let project = GradleProjectFixture::new();

    vcatalog(&project).args(["--quiet", "generate"]).assert().success().stdout("");
    assert_eq!(project.read_catalog(), "");
}
