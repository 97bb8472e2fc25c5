use super::vcatalog;
use vcatalog_cli::test_utils::GradleProjectFixture;

const HAND_WRITTEN: &str = r#"[versions]
agp = "8.9.0"
guava = { strictly = "[31, 33[", prefer = "32.1.3-jre" }

[libraries]
guava = { module = "com.google.guava:guava", version.ref = "guava" }
junit = "junit:junit:4.13.2"

[plugins]
android-application = { id = "com.android.application", version.ref = "agp" }

[bundles]
testing = ["junit", "guava"]
"#;

#[test]
fn test_merge_with_empty_extraction_keeps_catalog() {
    let project = GradleProjectFixture::new();
    project.write("gradle/libs.versions.toml", HAND_WRITTEN);
    project.write("build.gradle", "// empty\n");

    vcatalog(&project).arg("generate").assert().success();

    assert_eq!(project.read_catalog(), HAND_WRITTEN);
}

#[test]
fn test_merge_adds_new_entries_only() {
    let project = GradleProjectFixture::new();
    project.write("gradle/libs.versions.toml", HAND_WRITTEN);
    project.write(
        "app/build.gradle.kts",
        r#"
plugins {
    id("com.android.application") version "9.0.0"
}
dependencies {
    implementation("com.squareup.okhttp3:okhttp:4.12.0")
}
"#,
    );

    vcatalog(&project).arg("generate").assert().success();

    let catalog = project.read_catalog();
    assert!(catalog.contains(
        r#"com-squareup-okhttp3-okhttp = { group = "com.squareup.okhttp3", name = "okhttp", version = "4.12.0" }"#
    ));
    assert!(catalog.contains(
        r#"com-android-application = { id = "com.android.application", version = "9.0.0" }"#
    ));
    assert!(catalog.contains(
        r#"android-application = { id = "com.android.application", version.ref = "agp" }"#
    ));
    assert!(catalog.contains(r#"testing = ["junit", "guava"]"#));
}

#[test]
fn test_second_run_is_idempotent() {
    let project = GradleProjectFixture::new();
    project.write(
        "build.gradle",
        r#"
        val fooVersion = "1.0"
        api("foo:foo:$fooVersion")
        implementation "foo.sub:No-Version"
"#,
    );

    vcatalog(&project).arg("generate").assert().success();
    let first = project.read_catalog();

    vcatalog(&project).arg("generate").assert().success();
    assert_eq!(project.read_catalog(), first);
}

#[test]
fn test_hand_edits_survive_regeneration() {
    let project = GradleProjectFixture::new();
    project.write("build.gradle", r#"api("bar:bar:${barVersion}")"#);

    vcatalog(&project).arg("generate").assert().success();
    let edited = project.read_catalog().replace(r#"barVersion = "FIXME""#, r#"barVersion = "2.5""#);
    project.write("gradle/libs.versions.toml", &edited);

    vcatalog(&project).arg("generate").assert().success();
    assert_eq!(project.read_catalog(), edited);
    assert!(edited.contains(r#"barVersion = "2.5""#));
}

#[test]
fn test_unsupported_section_is_rejected() {
    let project = GradleProjectFixture::new();
    let original = "[metadata]\nformat = \"1.1\"\n";
    project.write("gradle/libs.versions.toml", original);
    project.write("build.gradle", r#"api("foo:foo:1.0")"#);

    vcatalog(&project).arg("generate").assert().failure().code(1);

    assert_eq!(project.read_catalog(), original);
}
