//! End-to-end tests for the odfgrep binary.
//!
//! Each test synthesizes ODF documents (ZIP archives of XML streams) in a
//! temporary directory and drives the built binary against them.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn odfgrep_cmd() -> Command {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("Failed to find workspace root");
    let bin_path = workspace_root.join("target/debug/odfgrep");
    Command::new(bin_path)
}

fn content_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content
    xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0"
    xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0">
  <office:body><office:text>{body}</office:text></office:body>
</office:document-content>"#
    )
}

fn meta_xml(fields: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-meta
    xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0"
    xmlns:dc="http://purl.org/dc/elements/1.1/">
  <office:meta>{fields}</office:meta>
</office:document-meta>"#
    )
}

fn write_document(dir: &Path, name: &str, members: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let mut zip = ZipWriter::new(File::create(&path).unwrap());
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (member, content) in members {
        zip.start_file(*member, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
    path
}

fn simple_document(dir: &Path, name: &str, body: &str) -> PathBuf {
    write_document(dir, name, &[("content.xml", &content_xml(body))])
}

mod echo_text {
    use super::*;

    #[test]
    fn prints_matching_paragraphs() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(
            temp.path(),
            "report.odt",
            "<text:p>the deadline is friday</text:p><text:p>unrelated</text:p>",
        );

        odfgrep_cmd()
            .arg("deadline")
            .arg(&doc)
            .assert()
            .success()
            .stdout("the deadline is friday\n");
    }

    #[test]
    fn exits_one_without_matches() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(temp.path(), "report.odt", "<text:p>nothing here</text:p>");

        odfgrep_cmd()
            .arg("deadline")
            .arg(&doc)
            .assert()
            .code(1)
            .stdout("");
    }

    #[test]
    fn labels_output_for_multiple_documents() {
        let temp = TempDir::new().unwrap();
        let a = simple_document(temp.path(), "a.odt", "<text:p>shared term</text:p>");
        let b = simple_document(temp.path(), "b.odt", "<text:p>shared term too</text:p>");

        odfgrep_cmd()
            .arg("shared")
            .arg(&a)
            .arg(&b)
            .assert()
            .success()
            .stdout(predicate::str::contains("a.odt: shared term"))
            .stdout(predicate::str::contains("b.odt: shared term too"));
    }

    #[test]
    fn no_filename_suppresses_labels() {
        let temp = TempDir::new().unwrap();
        let a = simple_document(temp.path(), "a.odt", "<text:p>shared term</text:p>");
        let b = simple_document(temp.path(), "b.odt", "<text:p>shared too</text:p>");

        odfgrep_cmd()
            .arg("--no-filename")
            .arg("shared")
            .arg(&a)
            .arg(&b)
            .assert()
            .success()
            .stdout("shared term\nshared too\n");
    }

    #[test]
    fn flattens_styled_spans_inside_a_paragraph() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(
            temp.path(),
            "styled.odt",
            "<text:p>before <text:span>dead</text:span>line after</text:p>",
        );

        odfgrep_cmd()
            .arg("deadline")
            .arg(&doc)
            .assert()
            .success()
            .stdout("before deadline after\n");
    }

    #[test]
    fn max_count_stops_echoing_after_the_cutoff() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(
            temp.path(),
            "many.odt",
            "<text:p>hit one</text:p><text:p>hit two</text:p><text:p>hit three</text:p>",
        );

        odfgrep_cmd()
            .arg("-m")
            .arg("2")
            .arg("hit")
            .arg(&doc)
            .assert()
            .success()
            .stdout("hit one\nhit two\n");
    }

    #[test]
    fn invert_match_prints_non_matching_units() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(
            temp.path(),
            "mixed.odt",
            "<text:p>keep this</text:p><text:p>drop that</text:p>",
        );

        odfgrep_cmd()
            .arg("-v")
            .arg("drop")
            .arg(&doc)
            .assert()
            .success()
            .stdout("keep this\n");
    }
}

mod counting {
    use super::*;

    #[test]
    fn single_document_count_has_no_label() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(
            temp.path(),
            "report.odt",
            "<text:p>hit</text:p><text:h>hit heading</text:h><text:p>miss</text:p>",
        );

        odfgrep_cmd()
            .arg("-c")
            .arg("hit")
            .arg(&doc)
            .assert()
            .success()
            .stdout("2\n");
    }

    #[test]
    fn multiple_documents_are_labeled() {
        let temp = TempDir::new().unwrap();
        let a = simple_document(temp.path(), "a.odt", "<text:p>hit</text:p>");
        let b = simple_document(temp.path(), "b.odt", "<text:p>miss</text:p>");

        odfgrep_cmd()
            .arg("-c")
            .arg("hit")
            .arg(&a)
            .arg(&b)
            .assert()
            .success()
            .stdout(predicate::str::contains("a.odt: 1"))
            .stdout(predicate::str::contains("b.odt: 0"));
    }
}

mod file_listing {
    use super::*;

    #[test]
    fn files_with_match_prints_each_name_once() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(
            temp.path(),
            "twice.odt",
            "<text:p>hit one</text:p><text:p>hit two</text:p>",
        );

        odfgrep_cmd()
            .arg("-l")
            .arg("-H")
            .arg("hit")
            .arg(&doc)
            .assert()
            .success()
            .stdout(predicate::str::contains("twice.odt\n").count(1));
    }

    #[test]
    fn files_without_match_prints_only_clean_documents() {
        let temp = TempDir::new().unwrap();
        let hit = simple_document(temp.path(), "hit.odt", "<text:p>hit</text:p>");
        let clean = simple_document(temp.path(), "clean.odt", "<text:p>miss</text:p>");

        odfgrep_cmd()
            .arg("-L")
            .arg("hit")
            .arg(&hit)
            .arg(&clean)
            .assert()
            // Exit status reflects matches found, not names printed.
            .success()
            .stdout(predicate::str::contains("clean.odt"))
            .stdout(predicate::str::contains("hit.odt").not());
    }
}

mod quiet_mode {
    use super::*;

    #[test]
    fn match_is_silent_and_successful() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(temp.path(), "report.odt", "<text:p>hit</text:p>");

        odfgrep_cmd()
            .arg("-q")
            .arg("hit")
            .arg(&doc)
            .assert()
            .success()
            .stdout("");
    }

    #[test]
    fn no_match_is_silent_and_fails() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(temp.path(), "report.odt", "<text:p>miss</text:p>");

        odfgrep_cmd()
            .arg("-q")
            .arg("hit")
            .arg(&doc)
            .assert()
            .code(1)
            .stdout("");
    }
}

mod streams {
    use super::*;

    #[test]
    fn meta_stream_is_searched_with_meta_flag() {
        let temp = TempDir::new().unwrap();
        let doc = write_document(
            temp.path(),
            "meta.odt",
            &[
                ("content.xml", &content_xml("<text:p>plain body</text:p>")),
                ("meta.xml", &meta_xml("<dc:title>secret title</dc:title>")),
            ],
        );

        odfgrep_cmd()
            .arg("-M")
            .arg("-H")
            .arg("secret")
            .arg(&doc)
            .assert()
            .success()
            .stdout(predicate::str::contains("meta.odt<title>: secret title"));
    }

    #[test]
    fn meta_stream_is_ignored_by_default() {
        let temp = TempDir::new().unwrap();
        let doc = write_document(
            temp.path(),
            "meta.odt",
            &[
                ("content.xml", &content_xml("<text:p>plain body</text:p>")),
                ("meta.xml", &meta_xml("<dc:title>secret title</dc:title>")),
            ],
        );

        odfgrep_cmd().arg("secret").arg(&doc).assert().code(1);
    }

    #[test]
    fn deleted_text_needs_the_deleted_flag() {
        let temp = TempDir::new().unwrap();
        let body = "<text:p>visible</text:p>\
            <text:tracked-changes><text:deletion>\
            <text:p>removed secret</text:p>\
            </text:deletion></text:tracked-changes>";
        let doc = simple_document(temp.path(), "tracked.odt", body);

        odfgrep_cmd().arg("secret").arg(&doc).assert().code(1);

        odfgrep_cmd()
            .arg("-d")
            .arg("secret")
            .arg(&doc)
            .assert()
            .success()
            .stdout("removed secret\n");
    }
}

mod errors {
    use super::*;

    #[test]
    fn unreadable_document_exits_two() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.odt");

        odfgrep_cmd()
            .arg("pattern")
            .arg(&missing)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("missing.odt"));
    }

    #[test]
    fn later_match_wins_over_earlier_failure() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.odt");
        let good = simple_document(temp.path(), "good.odt", "<text:p>hit</text:p>");

        odfgrep_cmd()
            .arg("hit")
            .arg(&missing)
            .arg(&good)
            .assert()
            .success()
            .stdout(predicate::str::contains("hit"));
    }

    #[test]
    fn non_archive_document_exits_two() {
        let temp = TempDir::new().unwrap();
        let plain = temp.path().join("plain.odt");
        std::fs::write(&plain, "not a zip archive").unwrap();

        odfgrep_cmd().arg("pattern").arg(&plain).assert().code(2);
    }

    #[test]
    fn invalid_pattern_exits_three() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(temp.path(), "report.odt", "<text:p>text</text:p>");

        odfgrep_cmd().arg("broken(").arg(&doc).assert().code(3);
    }

    #[test]
    fn pattern_without_documents_exits_three() {
        odfgrep_cmd().arg("lonely-pattern").assert().code(3);
    }
}

mod patterns {
    use super::*;

    #[test]
    fn fixed_strings_treat_metacharacters_literally() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(temp.path(), "dots.odt", "<text:p>version axb</text:p>");

        odfgrep_cmd().arg("-F").arg("a.b").arg(&doc).assert().code(1);

        let doc2 = simple_document(temp.path(), "dots2.odt", "<text:p>version a.b</text:p>");
        odfgrep_cmd()
            .arg("-F")
            .arg("a.b")
            .arg(&doc2)
            .assert()
            .success();
    }

    #[test]
    fn regexp_option_accepts_leading_dash_patterns() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(temp.path(), "dash.odt", "<text:p>opt -x here</text:p>");

        odfgrep_cmd()
            .arg("-e")
            .arg("-x")
            .arg(&doc)
            .assert()
            .success()
            .stdout("opt -x here\n");
    }

    #[test]
    fn pattern_file_supplies_alternatives() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(temp.path(), "report.odt", "<text:p>beta release</text:p>");
        let pattern_file = temp.path().join("patterns.txt");
        std::fs::write(&pattern_file, "alpha\nbeta\n").unwrap();

        odfgrep_cmd()
            .arg("-f")
            .arg(&pattern_file)
            .arg(&doc)
            .assert()
            .success()
            .stdout("beta release\n");
    }

    #[test]
    fn unreadable_pattern_file_exits_three() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(temp.path(), "report.odt", "<text:p>text</text:p>");

        odfgrep_cmd()
            .arg("-f")
            .arg(temp.path().join("absent.txt"))
            .arg(&doc)
            .assert()
            .code(3);
    }

    #[test]
    fn ignore_case_folds_pattern_and_text() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(temp.path(), "report.odt", "<text:p>Quarterly REPORT</text:p>");

        odfgrep_cmd()
            .arg("-i")
            .arg("report")
            .arg(&doc)
            .assert()
            .success();
    }

    #[test]
    fn matches_non_ascii_paragraphs() {
        let temp = TempDir::new().unwrap();
        let doc = simple_document(temp.path(), "fr.odt", "<text:p>un sentiment de déjà vu</text:p>");

        odfgrep_cmd()
            .arg("déjà")
            .arg(&doc)
            .assert()
            .success()
            .stdout("un sentiment de déjà vu\n");
    }
}
