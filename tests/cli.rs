use std::io::Write;
use std::process::{Command, Output, Stdio};

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIALS: &[u8] = b"^*+-=_?.,:;\\|/\"'$%&@#()[]{}";

fn pgen(args: &[&str]) -> Output {
    pgen_with_stdin(args, b"")
}

fn pgen_with_stdin(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pgen"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn pgen");

    // The child may exit without reading stdin; a broken pipe here is fine.
    let _ = child.stdin.take().expect("stdin").write_all(input);
    child.wait_with_output().expect("wait for pgen")
}

/// Password bytes with the single trailing newline checked and removed.
fn password(output: &Output) -> &[u8] {
    assert!(output.status.success(), "status {:?}", output.status);
    let (last, body) = output.stdout.split_last().expect("empty stdout");
    assert_eq!(*last, b'\n');
    assert!(!body.contains(&b'\n'));
    body
}

fn all_in(bytes: &[u8], sets: &[&[u8]]) -> bool {
    bytes.iter().all(|b| sets.iter().any(|set| set.contains(b)))
}

#[test]
fn default_is_eight_alphanumerics() {
    let out = pgen(&[]);
    let pass = password(&out);
    assert_eq!(pass.len(), 8);
    assert!(all_in(pass, &[LOWER, UPPER, DIGITS]));
}

#[test]
fn five_from_custom_pair() {
    let out = pgen(&["-n", "5", "-c", "AB"]);
    assert_eq!(out.stdout.len(), 6);
    assert!(all_in(password(&out), &[b"AB"]));
}

#[test]
fn zero_length_is_only_newline() {
    let out = pgen(&["-n", "0", "-l"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"\n");
}

#[test]
fn non_numeric_length_is_zero() {
    let out = pgen(&["-n", "abc"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"\n");
}

#[test]
fn numeric_prefix_is_used() {
    let out = pgen(&["-n", "12xyz"]);
    assert_eq!(password(&out).len(), 12);
}

#[test]
fn long_password_spans_chunks() {
    let out = pgen(&["-n", "10000", "-d"]);
    let pass = password(&out);
    assert_eq!(pass.len(), 10_000);
    assert!(all_in(pass, &[DIGITS]));
}

#[test]
fn mixed_sources_stay_in_union() {
    let out = pgen(&["-n", "500", "-l", "-s", "-c", "XY"]);
    let pass = password(&out);
    assert_eq!(pass.len(), 500);
    assert!(all_in(pass, &[LOWER, SPECIALS, b"XY"]));
}

#[test]
fn empty_custom_string_falls_back_to_default() {
    let out = pgen(&["-n", "300", "-c", ""]);
    assert!(all_in(password(&out), &[LOWER, UPPER, DIGITS]));
}

#[test]
fn stdin_line_with_newline() {
    let out = pgen_with_stdin(&["-n", "200", "-C"], b"abc\n");
    assert!(all_in(password(&out), &[b"abc"]));
}

#[test]
fn stdin_line_without_newline() {
    let out = pgen_with_stdin(&["-n", "200", "-C"], b"abc");
    assert!(all_in(password(&out), &[b"abc"]));
}

#[test]
fn empty_stdin_falls_back_to_default() {
    let out = pgen_with_stdin(&["-n", "200", "-C"], b"");
    assert!(all_in(password(&out), &[LOWER, UPPER, DIGITS]));
}

#[test]
fn unbiased_mode_keeps_contract() {
    let out = pgen(&["-r", "-n", "5000", "-c", "xyz"]);
    let pass = password(&out);
    assert_eq!(pass.len(), 5000);
    assert!(all_in(pass, &[b"xyz"]));
}

#[test]
fn bundled_flags() {
    let out = pgen(&["-dn7"]);
    let pass = password(&out);
    assert_eq!(pass.len(), 7);
    assert!(all_in(pass, &[DIGITS]));
}

#[test]
fn help_exits_zero_without_generating() {
    let out = pgen(&["-h"]);
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.contains("USAGE"));
    assert!(text.contains("-n <NUMBER>"));
}

#[test]
fn version_exits_zero() {
    let out = pgen(&["-V"]);
    assert!(out.status.success());
    assert_eq!(
        out.stdout,
        format!("pgen {}\n", env!("CARGO_PKG_VERSION")).into_bytes()
    );
}

#[test]
fn unknown_flag_fails_with_no_output() {
    let out = pgen(&["-x"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("illegal option -- x"));
}

#[test]
fn unknown_flag_before_help_still_fails() {
    let out = pgen(&["-x", "-h"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_value_fails() {
    let out = pgen(&["-n"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn operands_are_ignored() {
    let out = pgen(&["-n", "4", "-d", "extra", "-x"]);
    let pass = password(&out);
    assert_eq!(pass.len(), 4);
    assert!(all_in(pass, &[DIGITS]));
}

#[test]
fn upper_only() {
    let out = pgen(&["-n", "300", "-u"]);
    let pass = password(&out);
    assert_eq!(pass.len(), 300);
    assert!(all_in(pass, &[UPPER]));
}

#[test]
fn charset_past_capacity_drops_later_sources() {
    // 300 letters fill all 256 slots, so the digits never make it in.
    let letters: String = LOWER.iter().cycle().take(300).map(|&b| char::from(b)).collect();
    let out = pgen(&["-n", "2000", "-c", &letters, "-d"]);
    let pass = password(&out);

    assert_eq!(pass.len(), 2000);
    assert!(all_in(pass, &[LOWER]));
    assert!(!pass.iter().any(u8::is_ascii_digit));
}

#[cfg(unix)]
fn interrupted_while_reading_stdin(sig: libc::c_int) -> Option<i32> {
    use std::thread::sleep;
    use std::time::Duration;

    let mut child = Command::new(env!("CARGO_BIN_EXE_pgen"))
        .arg("-C")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn pgen");

    // stdin stays open, so pgen blocks reading its line.
    let _stdin = child.stdin.take();
    sleep(Duration::from_millis(300));
    assert_eq!(unsafe { libc::kill(child.id() as libc::pid_t, sig) }, 0);

    let out = child.wait_with_output().expect("wait for pgen");
    assert!(out.stdout.is_empty());
    out.status.code()
}

#[cfg(unix)]
#[test]
fn sigint_exits_130() {
    assert_eq!(interrupted_while_reading_stdin(libc::SIGINT), Some(130));
}

#[cfg(unix)]
#[test]
fn sigterm_exits_130() {
    assert_eq!(interrupted_while_reading_stdin(libc::SIGTERM), Some(130));
}
