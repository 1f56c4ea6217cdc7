//! End-to-end scans over config-shaped input, chaining every layer.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use cask_lexer::{
    scan_string, AutoSemicolon, BracketScanner, Scanner, ScanErrorKind, StatementScanner,
    TokenKind, Tokenizer,
};
use pretty_assertions::assert_eq;

fn drain(scan: &mut impl Scanner) -> Vec<(TokenKind, String)> {
    let mut out = Vec::new();
    while scan.next() {
        out.push((scan.kind(), scan.text().to_owned()));
    }
    out
}

#[test]
fn terminators_are_inserted_across_a_config_file() {
    let source = "\
server {
    host \"example.org\"
    port 8080
}
timeout 2.5
";
    let mut scan = AutoSemicolon::new(Tokenizer::new(source, "app.cask"));
    let texts: Vec<String> = drain(&mut scan).into_iter().map(|(_, t)| t).collect();
    assert_eq!(
        texts,
        vec![
            "server", "{", "host", "\"example.org\"", ";", "port", "8080", ";", "}", ";",
            "timeout", "2.5", ";",
        ]
    );
    assert!(scan.err().is_none());
}

#[test]
fn bracket_scan_bounds_a_block_of_the_terminated_stream() {
    let source = "server { host local\nport 80 }\nnext";
    let mut scan = AutoSemicolon::new(Tokenizer::new(source, "app.cask"));

    assert!(scan.next());
    assert_eq!(scan.text(), "server");
    assert!(scan.next());
    assert_eq!(scan.kind(), TokenKind::Punct('{'));

    // The block's last statement is terminated before the closer, and
    // the closer itself is consumed by the sub-scan.
    let mut block = BracketScanner::new(&mut scan, '{', '}');
    let texts: Vec<String> = drain(&mut block).into_iter().map(|(_, t)| t).collect();
    assert_eq!(texts, vec!["host", "local", ";", "port", "80", ";"]);
    assert!(block.err().is_none());

    // Back at the wrapper, which terminates the statement the block
    // belonged to at the line break.
    assert!(scan.next());
    assert!(scan.kind().is_terminator());
    assert!(scan.next());
    assert_eq!(scan.text(), "next");
}

#[test]
fn statement_scan_splits_one_directive_at_a_time() {
    let source = "listen ( \"0.0.0.0\" ; 8080 )\nroot \"/srv\"";
    let mut scan = AutoSemicolon::new(Tokenizer::new(source, "app.cask"));

    // The ';' inside the parentheses is nested, so it passes through,
    // and the wrapper terminates the last group entry before `)`.
    let mut stmt = StatementScanner::new(&mut scan, &['('], &[')']);
    let texts: Vec<String> = drain(&mut stmt).into_iter().map(|(_, t)| t).collect();
    assert_eq!(
        texts,
        vec!["listen", "(", "\"0.0.0.0\"", ";", "8080", ";", ")"]
    );
    assert!(stmt.err().is_none());

    let mut stmt = StatementScanner::new(&mut scan, &['('], &[')']);
    let texts: Vec<String> = drain(&mut stmt).into_iter().map(|(_, t)| t).collect();
    assert_eq!(texts, vec!["root", "\"/srv\""]);
    assert!(stmt.err().is_none());
}

#[test]
fn string_values_decode_through_the_pipeline() {
    let mut scan = AutoSemicolon::new(Tokenizer::new(
        "name \"conf\\tdir\" `C:\\data`",
        "app.cask",
    ));
    let mut values = Vec::new();
    while scan.next() && !scan.kind().is_terminator() {
        values.push(scan_string(&scan).unwrap());
    }
    assert_eq!(values, vec!["name", "conf\tdir", "C:\\data"]);
}

#[test]
fn unterminated_block_reports_a_positioned_structural_error() {
    let source = "server {\n    port 80\n";
    let mut scan = AutoSemicolon::new(Tokenizer::new(source, "app.cask"));
    assert!(scan.next());
    assert!(scan.next());

    // The structural error is reported at the synthesized terminator,
    // which carries the position of the last real token.
    let mut block = BracketScanner::new(&mut scan, '{', '}');
    while block.next() {}
    let err = block.err().expect("unclosed block must error");
    assert_eq!(err.kind, ScanErrorKind::UnexpectedEof);
    assert_eq!(err.to_string(), "unexpected end of input (app.cask:2:10)");
}

#[test]
fn lexical_errors_surface_with_their_position() {
    let mut scan = Tokenizer::new("host \"unterminated\n", "app.cask");
    while scan.next() {}
    let err = scan.err().expect("bad literal must error");
    assert_eq!(
        err.to_string(),
        "string literal not terminated (app.cask:1:6)"
    );
}
