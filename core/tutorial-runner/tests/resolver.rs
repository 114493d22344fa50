// 커맨드 해석기 테스트

mod common;

use common::{capture_logs, empty_context};
use proptest::prelude::*;
use tutorial_runner::{CommandKind, load_command};

fn randomize_case(token: &str, mask: &[bool]) -> String {
    token
        .chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn prop_known_tokens_resolve_in_any_case(
        idx in 0usize..CommandKind::ALL.len(),
        mask in prop::collection::vec(any::<bool>(), 1..24),
    ) {
        let kind = CommandKind::ALL[idx];
        let token = randomize_case(kind.token(), &mask);
        let context = empty_context();

        let command = load_command(&token, &context);
        prop_assert!(command.is_some());
        let command = command.unwrap();
        prop_assert_eq!(command.name(), kind.token());
        prop_assert!(std::ptr::eq(command.keyspace(), context.keyspace()));
    }

    #[test]
    fn prop_unknown_tokens_do_not_resolve(token in "[A-Za-z_]{0,24}") {
        prop_assume!(CommandKind::from_token(&token).is_none());
        let context = empty_context();

        let (command, lines) = capture_logs(|| load_command(&token, &context).is_some());

        prop_assert!(!command);
        let expected = format!("No match found for {token}.");
        let misses = lines.iter().filter(|l| l.contains(&expected)).count();
        prop_assert_eq!(misses, 1);
        prop_assert_eq!(lines.iter().filter(|l| l.contains("ERROR")).count(), 1);
    }
}

#[test]
fn test_resolution_has_no_side_effects() {
    let context = empty_context();

    let (resolved, lines) = capture_logs(|| load_command("get_slice_acc", &context).is_some());

    assert!(resolved);
    assert!(lines.iter().all(|l| !l.contains("ERROR")));
    assert!(!context.cluster().connection_manager().is_shutdown());
}
