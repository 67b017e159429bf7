//! End-to-end command tests against the built-in filesystem.
//!
//! Every test runs with a deterministic host so that time- and
//! randomness-dependent commands produce fixed output.

use termsim_core::{
    AutocompleteResult, CommandResult, Host, Output, Session, VirtualFs, execute, parse_line,
    resolve, suggest_commands,
};

const FIXED_NOW: u64 = 1_704_067_200;

/// Clock frozen at 2024-01-01 and an RNG that always picks the first item.
struct TestHost;

impl Host for TestHost {
    fn now(&self) -> u64 {
        FIXED_NOW
    }

    fn random_index(&mut self, _len: usize) -> usize {
        0
    }
}

fn run(line: &str, cwd: &str, fs: &mut VirtualFs) -> CommandResult {
    let parsed = parse_line(line);
    execute(&parsed.name, &parsed.args, cwd, fs, &mut TestHost)
}

fn run_default(line: &str, cwd: &str) -> CommandResult {
    run(line, cwd, &mut VirtualFs::with_defaults())
}

// ============================================================================
// Path resolution
// ============================================================================

#[test]
fn test_resolve_examples() {
    assert_eq!(resolve("/home/user", ".."), "/home");
    assert_eq!(resolve("/", ".."), "/");
    assert_eq!(resolve("/home/user", "../../etc"), "/etc");
    assert_eq!(resolve("/home/user", "."), "/home/user");
    assert_eq!(resolve("/home/user", "/etc/"), "/etc");
}

#[test]
fn test_resolve_is_idempotent() {
    let cases = [
        ("/home/user", "documents"),
        ("/home/user", "../.."),
        ("/", "a/./b/../c"),
        ("/tmp", "/var/log"),
        ("/home/user", "x/y/"),
    ];
    for (dir, input) in cases {
        let once = resolve(dir, input);
        assert_eq!(resolve(dir, &once), once, "resolve({:?}, {:?})", dir, input);
    }
}

// ============================================================================
// Filesystem store
// ============================================================================

#[test]
fn test_create_file_then_lookup() {
    let mut fs = VirtualFs::with_defaults();
    fs.create_file("/home/user/x.txt", "hi", FIXED_NOW).unwrap();

    let node = fs.lookup("/home/user/x.txt").unwrap();
    assert_eq!(node.content(), Some("hi"));
    assert_eq!(node.size(), 2);
}

#[test]
fn test_create_under_missing_parent_leaves_tree_untouched() {
    let mut fs = VirtualFs::with_defaults();
    let before = fs.clone();

    assert!(fs.create_file("/nope/x.txt", "hi", FIXED_NOW).is_err());
    assert_eq!(fs, before);

    fs.create_directory("/nope", FIXED_NOW).unwrap();
    fs.create_file("/nope/x.txt", "hi", FIXED_NOW).unwrap();
    assert!(fs.lookup("/nope/x.txt").is_some());
}

#[test]
fn test_snapshot_preserves_session_changes() {
    let mut fs = VirtualFs::with_defaults();
    run("mkdir /tmp/work", "/", &mut fs);
    run("touch /tmp/work/log.txt", "/", &mut fs);

    let restored = VirtualFs::from_snapshot(&fs.snapshot().unwrap()).unwrap();
    assert_eq!(restored, fs);
    assert!(restored.lookup("/tmp/work/log.txt").is_some());
}

// ============================================================================
// Builtins
// ============================================================================

#[test]
fn test_cd_missing_directory() {
    let result = run_default("cd /nope", "/");
    assert_eq!(result.exit_code, 1);
    assert!(result.error.unwrap().contains("No such file or directory"));
}

#[test]
fn test_cd_sentinel() {
    let result = run_default("cd ~/documents", "/");
    assert_eq!(
        result.output,
        Output::ChangeDirectory("/home/user/documents".to_string())
    );
    assert_eq!(
        result.output.sentinel(),
        "change-directory:/home/user/documents"
    );
    assert_eq!(run_default("clear", "/").output.sentinel(), "clear-screen");
}

#[test]
fn test_cat_without_operands() {
    let result = run_default("cat", "/");
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.error.as_deref(), Some("cat: missing file operand"));
}

#[test]
fn test_wc_readme() {
    let result = run_default("wc readme.txt", "/home/user/documents");
    assert_eq!(result.text_output(), "      3      18     109 readme.txt");
}

#[test]
fn test_ls_all_dot_entries() {
    let at_root = run_default("ls -l -a", "/").text_output().to_string();
    assert!(at_root.lines().all(|l| !l.ends_with(" .") && !l.ends_with(" ..")));
    assert_eq!(at_root.lines().count(), 6);

    let at_home = run_default("ls -l -a", "/home/user").text_output().to_string();
    let lines: Vec<_> = at_home.lines().collect();
    assert!(lines[0].ends_with(" ."));
    assert!(lines[1].ends_with(" .."));
    assert!(lines.iter().any(|l| l.ends_with(" .bashrc")));
}

#[test]
fn test_ls_insertion_order() {
    assert_eq!(
        run_default("ls", "/home/user").text_output(),
        "documents  projects  scripts"
    );
    assert_eq!(
        run_default("ls -a", "/home/user").text_output(),
        ".  ..  documents  projects  scripts  .bashrc  .profile"
    );
}

#[test]
fn test_grep_on_directory() {
    let result = run_default("grep x documents", "/home/user");
    assert_eq!(result.exit_code, 1);
    assert_eq!(
        result.error.as_deref(),
        Some("grep: documents: Is a directory")
    );
}

#[test]
fn test_mkdir_dot_names_leave_tree_untouched() {
    let mut fs = VirtualFs::with_defaults();
    let before = fs.clone();
    assert_eq!(run("mkdir /tmp/..", "/", &mut fs).exit_code, 1);
    assert_eq!(run("mkdir /tmp/.", "/", &mut fs).exit_code, 1);
    assert_eq!(run("touch /tmp/..", "/", &mut fs).exit_code, 1);
    assert_eq!(fs, before);
}

#[test]
fn test_ls_all_short_at_root() {
    let listing = run_default("ls -a", "/").text_output().to_string();
    assert!(!listing.split("  ").any(|name| name == "." || name == ".."));
    assert!(listing.split("  ").any(|name| name == "home"));
}

#[test]
fn test_unknown_command() {
    let result = run_default("frobnicate --now", "/");
    assert_eq!(result.exit_code, 127);
    assert_eq!(
        result.error.as_deref(),
        Some("bash: frobnicate: command not found")
    );
}

#[test]
fn test_empty_line_is_noop() {
    let result = run_default("   ", "/");
    assert!(result.is_success());
    assert_eq!(result.text_output(), "");
}

#[test]
fn test_date_uses_host_clock() {
    assert_eq!(
        run_default("date", "/").text_output(),
        "Mon Jan  1 00:00:00 UTC 2024"
    );
}

#[test]
fn test_text_filters_on_fixture() {
    let cwd = "/home/user/documents";
    assert_eq!(
        run_default("head -n 2 todo.txt", cwd).text_output(),
        "buy milk\nwrite documentation"
    );
    assert_eq!(
        run_default("tail -n 1 todo.txt", cwd).text_output(),
        "call the plumber"
    );
    assert_eq!(
        run_default("grep buy todo.txt", cwd).text_output(),
        "buy milk\nbuy coffee"
    );
    assert_eq!(run_default("grep xyz todo.txt", cwd).exit_code, 1);
    assert_eq!(run_default("grep x missing.txt", cwd).exit_code, 2);
    assert_eq!(
        run_default("head /usr/share/dict.txt", cwd)
            .text_output()
            .lines()
            .count(),
        10
    );
}

#[test]
fn test_file_on_fixture() {
    let result = run_default("file ~/scripts/backup.sh ~/documents", "/");
    let lines: Vec<_> = result.text_output().lines().map(str::to_string).collect();
    assert_eq!(
        lines[0],
        "~/scripts/backup.sh: Bourne-Again shell script, ASCII text executable"
    );
    assert_eq!(lines[1], "~/documents: directory");
}

#[test]
fn test_novelty_with_fixed_host() {
    assert_eq!(run_default("calc (1 + 2) * 3", "/").text_output(), "9");
    assert_eq!(run_default("calc 1 & 2", "/").exit_code, 1);
    assert_eq!(run_default("color matrix", "/").exit_code, 0);
    assert_eq!(run_default("timer soon", "/").exit_code, 1);
    assert!(!run_default("fortune", "/").text_output().is_empty());
}

// ============================================================================
// Input handling
// ============================================================================

#[test]
fn test_suggest_commands() {
    assert_eq!(suggest_commands("ca"), vec!["cat", "calc"]);
    assert_eq!(suggest_commands("").len(), 28);
}

#[test]
fn test_calc_rejects_out_of_range_literal() {
    let line = format!("calc 1/{}", "9".repeat(400));
    let result = run_default(&line, "/");
    assert_eq!(result.exit_code, 1);
    assert!(result.error.unwrap().starts_with("calc: "));
}

#[test]
fn test_session_round_trip() {
    let mut session = Session::with_host(VirtualFs::with_defaults(), TestHost);
    assert_eq!(session.prompt(), "user@termsim:~$");

    session.submit("cd documents");
    assert_eq!(session.cwd(), "/home/user/documents");

    session.submit("touch draft.md");
    assert!(session.fs().lookup("/home/user/documents/draft.md").is_some());

    assert_eq!(
        session.complete("cat dr"),
        AutocompleteResult::Single("cat draft.md ".to_string())
    );
    assert_eq!(session.navigate_history(-1).as_deref(), Some("touch draft.md"));
}
