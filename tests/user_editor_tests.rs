//! Tests for the User Editor
//!
//! These tests drive the full editor loop through a scripted prompter and verify:
//! - Add / replace semantics and username uniqueness
//! - Change password, promote/demote and delete on selected entries
//! - Skip, cancel and unhandled prompt results
//! - Headers never expose clear-text passwords

use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use archtui_users::prompt::scripted::PromptKind;
use archtui_users::{
    Password, ScriptedPrompter, ScriptedResponse, TerminalPrompter, Translator, User,
    UserEditorError, ask_for_additional_users,
};

const STRONG: &str = "Tr0ub4dor&3-horse";
const OTHER_STRONG: &str = "An0ther-Str0ng-One!";

fn text(s: &str) -> ScriptedResponse {
    ScriptedResponse::text(s)
}

fn choose(s: &str) -> ScriptedResponse {
    ScriptedResponse::choose(s)
}

/// Responses for a complete add flow with a strong password and the default shell
fn add_user(username: &str, password: &str, sudo: bool) -> Vec<ScriptedResponse> {
    vec![
        choose("Add a user"),
        text(username),
        text(password),
        text(password),
        if sudo { ScriptedResponse::Yes } else { ScriptedResponse::No },
        ScriptedResponse::Skip,
        ScriptedResponse::Default,
    ]
}

fn run(initial: &[User], script: Vec<Vec<ScriptedResponse>>) -> (Vec<User>, ScriptedPrompter) {
    let mut prompter = ScriptedPrompter::new(script.into_iter().flatten());
    let users = ask_for_additional_users(&mut prompter, &Translator::identity(), "Users", initial)
        .expect("Editor should succeed");
    assert!(prompter.is_exhausted(), "Script should be fully consumed");
    (users, prompter)
}

fn confirm() -> Vec<ScriptedResponse> {
    vec![choose("Confirm and exit")]
}

// =============================================================================
// Add
// =============================================================================

#[test]
fn test_add_then_replace_scenario() {
    // Weak password "pw1" needs the weak-password acknowledgement
    let first = vec![
        choose("Add a user"),
        text("alice"),
        text("pw1"),
        ScriptedResponse::Yes,
        text("pw1"),
        ScriptedResponse::Yes,
        ScriptedResponse::Skip,
        ScriptedResponse::Default,
    ];
    let (users, _) = run(&[], vec![first, confirm()]);

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "alice");
    assert!(users[0].sudo);
    assert_eq!(users[0].shell, "/bin/bash");
    assert_eq!(users[0].password.expose(), "pw1");

    let (users, _) = run(&users, vec![add_user("alice", STRONG, false), confirm()]);
    assert_eq!(users.len(), 1);
    assert!(!users[0].sudo);
    assert_eq!(users[0].password.expose(), STRONG);
}

#[test]
fn test_add_new_username_appends() {
    let initial = vec![User::new("alice", Password::new(STRONG), true)];
    let (users, _) = run(&initial, vec![add_user("bob", STRONG, false), confirm()]);
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob"]);
}

#[test]
fn test_replaced_user_moves_to_end() {
    let initial = vec![
        User::new("alice", Password::new(STRONG), true),
        User::new("bob", Password::new(STRONG), true),
    ];
    let (users, _) = run(&initial, vec![add_user("alice", STRONG, false), confirm()]);
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["bob", "alice"]);
}

#[test]
fn test_add_with_full_name_and_shell() {
    let script = vec![
        choose("Add a user"),
        text("carol"),
        text(STRONG),
        text(STRONG),
        ScriptedResponse::No,
        text("Carol Danvers"),
        choose("/bin/fish"),
    ];
    let (users, prompter) = run(&[], vec![script, confirm()]);
    assert_eq!(users[0].full_name.as_deref(), Some("Carol Danvers"));
    assert_eq!(users[0].shell, "/bin/fish");

    let shell_prompt = prompter
        .shown()
        .iter()
        .find(|p| p.header.ends_with("Select a shell for this user"))
        .expect("Shell prompt should be shown");
    assert_eq!(shell_prompt.options, vec!["/bin/bash", "/bin/fish", "/bin/zsh"]);
    assert_eq!(shell_prompt.default_index, Some(0));
    assert!(!shell_prompt.allow_skip);
}

#[test]
fn test_invalid_username_reprompts() {
    let script = vec![
        choose("Add a user"),
        text("Alice"),
        text("9lives"),
        text(&"a".repeat(33)),
        text("alice"),
        text(STRONG),
        text(STRONG),
        ScriptedResponse::Yes,
        ScriptedResponse::Skip,
        ScriptedResponse::Default,
    ];
    let (users, prompter) = run(&[], vec![script, confirm()]);
    assert_eq!(users.len(), 1);

    let username_errors: Vec<Option<String>> = prompter
        .shown()
        .iter()
        .filter(|p| p.header == "Enter a username")
        .map(|p| p.error.clone())
        .collect();
    let invalid = Some("The username you entered is invalid".to_string());
    assert_eq!(
        username_errors,
        vec![None, invalid.clone(), invalid.clone(), invalid]
    );
}

#[test]
fn test_skip_username_leaves_list_unchanged() {
    let initial = vec![User::new("alice", Password::new(STRONG), true)];
    let script = vec![choose("Add a user"), ScriptedResponse::Skip];
    let (users, _) = run(&initial, vec![script, confirm()]);
    assert_eq!(users, initial);
}

#[test]
fn test_empty_username_aborts_add() {
    let script = vec![choose("Add a user"), text("")];
    let (users, _) = run(&[], vec![script, confirm()]);
    assert!(users.is_empty());
}

#[test]
fn test_skip_password_aborts_add() {
    let script = vec![choose("Add a user"), text("dave"), ScriptedResponse::Skip];
    let (users, _) = run(&[], vec![script, confirm()]);
    assert!(users.is_empty());
}

#[test]
fn test_shell_falls_back_to_bash() {
    // A skip from the non-skippable shell prompt still yields the default shell
    let script = vec![
        choose("Add a user"),
        text("erin"),
        text(STRONG),
        text(STRONG),
        ScriptedResponse::Yes,
        ScriptedResponse::Skip,
        ScriptedResponse::Skip,
    ];
    let (users, _) = run(&[], vec![script, confirm()]);
    assert_eq!(users[0].shell, "/bin/bash");
}

#[test]
fn test_headers_accumulate_and_mask_password() {
    let script = vec![
        choose("Add a user"),
        text("frank"),
        text(STRONG),
        text(STRONG),
        ScriptedResponse::Yes,
        text("Frank Castle"),
        ScriptedResponse::Default,
    ];
    let (_, prompter) = run(&[], vec![script, confirm()]);

    for header in prompter.headers() {
        assert!(!header.contains(STRONG), "Header leaked password: {header}");
    }

    let sudo_prompt = prompter
        .shown()
        .iter()
        .find(|p| p.kind == PromptKind::Confirm)
        .expect("Sudo prompt should be shown");
    assert!(sudo_prompt.header.contains("Username: frank"));
    assert!(sudo_prompt.header.contains("Password: ********"));
    assert!(sudo_prompt.header.ends_with("Should \"frank\" be a superuser (sudo)?"));
    assert_eq!(sudo_prompt.default_index, Some(0));

    let shell_prompt = prompter
        .shown()
        .iter()
        .find(|p| p.header.ends_with("Select a shell for this user"))
        .expect("Shell prompt should be shown");
    assert!(shell_prompt.header.contains("Password: ********"));
    assert!(shell_prompt.header.contains("Sudo: true"));
    assert!(shell_prompt.header.contains("Full name: Frank Castle"));
}

#[test]
fn test_sudo_prompt_skip_is_unhandled() {
    let script = vec![
        choose("Add a user"),
        text("gina"),
        text(STRONG),
        text(STRONG),
        ScriptedResponse::Skip,
    ];
    let mut prompter = ScriptedPrompter::new(script);
    let result = ask_for_additional_users(&mut prompter, &Translator::identity(), "", &[]);
    assert!(matches!(result, Err(UserEditorError::UnhandledResult(_))));
}

#[test]
fn test_cancel_at_required_prompts_abandons_add() {
    let initial = vec![User::new("alice", Password::new(STRONG), true)];

    let at_sudo = vec![
        choose("Add a user"),
        text("bob"),
        text(STRONG),
        text(STRONG),
        ScriptedResponse::Cancel,
    ];
    let (users, _) = run(&initial, vec![at_sudo, confirm()]);
    assert_eq!(users, initial);

    let at_weak_warning = vec![
        choose("Add a user"),
        text("bob"),
        text("pw1"),
        ScriptedResponse::Cancel,
    ];
    let (users, _) = run(&initial, vec![at_weak_warning, confirm()]);
    assert_eq!(users, initial);

    let at_confirmation = vec![
        choose("Add a user"),
        text("bob"),
        text(STRONG),
        ScriptedResponse::Cancel,
    ];
    let (users, _) = run(&initial, vec![at_confirmation, confirm()]);
    assert_eq!(users, initial);
}

// =============================================================================
// Terminal keys
// =============================================================================

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_line(keys: &mut VecDeque<KeyEvent>, s: &str) {
    keys.extend(s.chars().map(|c| press(KeyCode::Char(c))));
    keys.push_back(press(KeyCode::Enter));
}

#[test]
fn test_ctrl_c_at_sudo_prompt_keeps_session() {
    let initial = vec![User::new("alice", Password::new(STRONG), true)];

    let mut keys = VecDeque::new();
    // Root menu preselects "Add a user"
    keys.push_back(press(KeyCode::Enter));
    type_line(&mut keys, "bob");
    type_line(&mut keys, STRONG);
    type_line(&mut keys, STRONG);
    keys.push_back(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    // Back at the root menu: move to "Confirm and exit"
    keys.push_back(press(KeyCode::Down));
    keys.push_back(press(KeyCode::Enter));

    let terminal = Terminal::new(TestBackend::new(80, 24)).expect("Failed to create terminal");
    let mut prompter = TerminalPrompter::new(terminal, keys, "User Accounts");
    let users = ask_for_additional_users(&mut prompter, &Translator::identity(), "Users", &initial)
        .expect("Ctrl+C inside the add flow should not end the session");
    assert_eq!(users, initial);
}

// =============================================================================
// Entry actions
// =============================================================================

#[test]
fn test_change_password() {
    let initial = vec![User::new("alice", Password::new(STRONG), true)];
    let script = vec![
        choose("alice"),
        choose("Change password"),
        text(OTHER_STRONG),
        text(OTHER_STRONG),
    ];
    let (users, prompter) = run(&initial, vec![script, confirm()]);
    assert_eq!(users[0].password.expose(), OTHER_STRONG);
    assert!(prompter.headers()[2].starts_with("User: alice\nEnter new password"));
}

#[test]
fn test_change_password_skipped() {
    let initial = vec![User::new("alice", Password::new(STRONG), true)];
    let script = vec![choose("alice"), choose("Change password"), ScriptedResponse::Skip];
    let (users, _) = run(&initial, vec![script, confirm()]);
    assert_eq!(users, initial);
}

#[test]
fn test_promote_demote_twice_restores() {
    let initial = vec![User::new("alice", Password::new(STRONG), true)];
    let toggle = vec![choose("alice"), choose("Promote/Demote user")];

    let (once, _) = run(&initial, vec![toggle.clone(), confirm()]);
    assert!(!once[0].sudo);

    let (twice, _) = run(&initial, vec![toggle.clone(), toggle, confirm()]);
    assert_eq!(twice, initial);
}

#[test]
fn test_delete_selected_entry() {
    let initial = vec![
        User::new("alice", Password::new(STRONG), true),
        User::new("bob", Password::new(STRONG), false),
    ];
    let script = vec![choose("alice"), choose("Delete User")];
    let (users, _) = run(&initial, vec![script, confirm()]);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "bob");
}

#[test]
fn test_entry_menu_cancel_is_noop() {
    let initial = vec![User::new("alice", Password::new(STRONG), true)];
    let script = vec![choose("alice"), choose("Cancel")];
    let (users, _) = run(&initial, vec![script, confirm()]);
    assert_eq!(users, initial);
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn test_input_is_not_mutated_and_cancel_restores() {
    let initial = vec![User::new("alice", Password::new(STRONG), true)];
    let snapshot = initial.clone();

    let script = vec![
        choose("alice"),
        choose("Delete User"),
        choose("Cancel"),
    ];
    let (users, _) = run(&initial, vec![script]);
    assert_eq!(users, snapshot);
    assert_eq!(initial, snapshot);
}

#[test]
fn test_ctrl_c_at_root_returns_original() {
    let (users, _) = run(
        &[],
        vec![add_user("alice", STRONG, true), vec![ScriptedResponse::Cancel]],
    );
    assert!(users.is_empty());
}

#[test]
fn test_entries_listed_by_username() {
    let initial = vec![
        User::new("alice", Password::new(STRONG), true),
        User::new("bob", Password::new(STRONG), false),
    ];
    let (_, prompter) = run(&initial, vec![confirm()]);
    assert_eq!(
        prompter.shown()[0].options,
        vec!["alice", "bob", "Add a user", "Confirm and exit", "Cancel"]
    );
    assert_eq!(prompter.shown()[0].header, "Users");
}

#[test]
fn test_translated_labels_drive_same_actions() {
    let catalog = [
        ("Add a user", "Benutzer hinzufügen"),
        ("Confirm and exit", "Bestätigen und beenden"),
        ("Enter a username", "Benutzernamen eingeben"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    let translator = Translator::from_catalog(catalog);

    let mut prompter = ScriptedPrompter::new([
        choose("Benutzer hinzufügen"),
        ScriptedResponse::Skip,
        choose("Bestätigen und beenden"),
    ]);
    let users = ask_for_additional_users(&mut prompter, &translator, "", &[]).unwrap();
    assert!(users.is_empty());
    assert_eq!(prompter.headers()[1], "Benutzernamen eingeben");
}
