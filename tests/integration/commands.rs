//! End-to-end command behavior through the executor.

use taconnect::core::PersonType;
use taconnect::error::Error;
use taconnect::logic::error::{CommandError, ParseError};

use crate::fixtures::{harness, harness_with, typical_five, PersonBuilder};

fn feedback(harness: &mut crate::fixtures::Harness, line: &str) -> String {
    harness
        .logic
        .execute(line)
        .unwrap_or_else(|err| panic!("command failed: {line}: {err}"))
        .feedback
}

// -----------------------------------------------------------------------------
// add
// -----------------------------------------------------------------------------

#[test]
fn add_reports_the_new_person() {
    let mut h = harness();
    let feedback = feedback(
        &mut h,
        "add n/John Doe p/98765432 e/johnd@example.com t/student tg/@johndoe s/G1",
    );
    assert_eq!(
        feedback,
        "New person added: Type: student; Name: John Doe; Phone: 98765432; \
         Email: johnd@example.com; Telegram: @johndoe; Session: G1"
    );
    assert_eq!(h.logic.store().len(), 1);
}

#[test]
fn add_student_without_session_fails_and_leaves_store_unchanged() {
    let mut h = harness();
    let err = h
        .logic
        .execute("add n/John p/900 e/j@x.com t/student")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Command(CommandError::MissingSession)
    ));
    assert_eq!(err.to_string(), "Students and TAs must have a session");
    assert!(h.logic.store().is_empty());
    assert_eq!(h.logic.store().counter().person_count(), 0);
    assert_eq!(h.storage.save_count(), 0, "no persistence on failure");
}

#[test]
fn add_staff_with_session_fails() {
    let mut h = harness();
    let err = h
        .logic
        .execute("add n/Pat p/900 e/p@x.com t/staff s/G1")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Command(CommandError::UnexpectedSession)
    ));
}

#[test]
fn add_duplicate_email_is_rejected() {
    let mut h = harness();
    feedback(&mut h, "add n/John p/900 e/j@x.com t/student s/G1");
    let err = h
        .logic
        .execute("add n/Jane p/901 e/j@x.com t/student s/G2")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Command(CommandError::DuplicatePerson)
    ));
    assert_eq!(h.logic.store().len(), 1);
}

// -----------------------------------------------------------------------------
// find / list / listsession / sessions
// -----------------------------------------------------------------------------

#[test]
fn find_narrows_the_displayed_list_case_insensitively() {
    let mut h = harness_with(typical_five());
    let feedback = feedback(&mut h, "find aLiCe");
    assert!(feedback.starts_with("1 person found\n"), "{feedback}");
    assert!(feedback.contains("Alice Tan"));
    assert_eq!(h.logic.displayed_persons().len(), 1);
}

#[test]
fn find_without_match_echoes_the_keyword() {
    let mut h = harness_with(typical_five());
    assert_eq!(
        feedback(&mut h, "find  Zed   Yam "),
        "Oops, no one's name contains Zed Yam"
    );
    assert!(h.logic.displayed_persons().is_empty());
    // Still a success: the store itself is untouched.
    assert_eq!(h.logic.store().len(), 5);
}

#[test]
fn find_rejects_empty_and_invalid_keywords() {
    let mut h = harness_with(typical_five());
    assert!(matches!(
        h.logic.execute("find   "),
        Err(Error::Parse(ParseError::EmptyKeyword))
    ));
    assert!(matches!(
        h.logic.execute("find al1ce"),
        Err(Error::Parse(ParseError::InvalidKeyword))
    ));
}

#[test]
fn list_resets_the_filter() {
    let mut h = harness_with(typical_five());
    feedback(&mut h, "find Alice");
    assert_eq!(h.logic.displayed_persons().len(), 1);

    let feedback = feedback(&mut h, "list");
    assert!(feedback.starts_with("Listed all persons"));
    assert_eq!(h.logic.displayed_persons().len(), 5);
}

#[test]
fn listsession_filters_by_exact_session() {
    let mut h = harness_with(typical_five());
    let feedback = feedback(&mut h, "listsession T2");
    assert!(feedback.starts_with("2 persons listed!"), "{feedback}");
    assert!(feedback.contains("Carl Wu") && feedback.contains("Daniel Ho"));
}

#[test]
fn listsession_missing_session_is_a_success_message() {
    let mut h = harness_with(typical_five());
    assert_eq!(
        feedback(&mut h, "listsession Z9"),
        "Specified session Z9 does not exist."
    );
}

#[test]
fn listsession_rejects_bad_session_format() {
    let mut h = harness();
    let err = h.logic.execute("listsession g1").unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ParseError::InvalidSessionFormat)
    ));
    assert!(err.to_string().contains("uppercase letters"));
}

#[test]
fn sessions_lists_distinct_sessions_sorted_case_insensitively() {
    let mut h = harness_with(typical_five());
    assert_eq!(
        feedback(&mut h, "sessions"),
        "3 sessions found in TAConnect. Here is the list: G1, T2, T3"
    );
}

#[test]
fn sessions_on_empty_store_reports_none() {
    let mut h = harness();
    assert_eq!(feedback(&mut h, "sessions"), "No sessions found in TAConnect.");
}

#[test]
fn read_commands_do_not_mutate_store_or_history() {
    let mut h = harness_with(typical_five());
    feedback(&mut h, "find Alice");
    feedback(&mut h, "sessions");
    feedback(&mut h, "listsession G1");
    feedback(&mut h, "list");

    assert_eq!(h.logic.store().len(), 5);
    assert_eq!(h.storage.save_count(), 0);
    let err = h.logic.execute("undo").unwrap_err();
    assert!(matches!(err, Error::Command(CommandError::NothingToUndo)));
}

// -----------------------------------------------------------------------------
// delete
// -----------------------------------------------------------------------------

#[test]
fn delete_single_index_reports_the_person() {
    let mut h = harness_with(typical_five());
    let feedback = feedback(&mut h, "delete 1");
    assert!(feedback.starts_with("Deleted Person: "), "{feedback}");
    assert!(feedback.contains("Alice Tan"));
    assert_eq!(h.logic.store().len(), 4);
}

#[test]
fn delete_range_removes_the_batch_in_one_command() {
    let mut h = harness_with(typical_five());
    let feedback = feedback(&mut h, "delete 2-4");
    assert!(feedback.starts_with("Deleted Persons:\n"), "{feedback}");
    assert_eq!(h.logic.store().len(), 2);
    let names: Vec<String> = h
        .logic
        .store()
        .persons()
        .iter()
        .map(|p| p.name.to_string())
        .collect();
    assert_eq!(names, ["Alice Tan", "Elle Koh"]);
}

#[test]
fn delete_resolves_indexes_against_the_displayed_list() {
    let mut h = harness_with(typical_five());
    feedback(&mut h, "listsession T2");
    // Displayed index 1 is Carl Wu, not Alice Tan.
    let feedback = feedback(&mut h, "delete 1");
    assert!(feedback.contains("Carl Wu"), "{feedback}");
    assert_eq!(h.logic.store().len(), 4);
}

#[test]
fn delete_resolves_all_selectors_before_removing() {
    // Indexes 1 and 2 refer to the pre-delete display; if removal shifted
    // later selectors, "1 2" would delete persons 1 and 3.
    let mut h = harness_with(typical_five());
    feedback(&mut h, "delete 1 2");
    let names: Vec<String> = h
        .logic
        .store()
        .persons()
        .iter()
        .map(|p| p.name.to_string())
        .collect();
    assert_eq!(names, ["Carl Wu", "Daniel Ho", "Elle Koh"]);
}

#[test]
fn delete_dedups_targets_selected_twice() {
    let mut h = harness_with(typical_five());
    // Index 1 and the name both resolve to Alice; she is removed once and
    // reported once.
    let feedback = feedback(&mut h, "delete 1 n:Alice Tan");
    assert!(feedback.starts_with("Deleted Person: "), "{feedback}");
    assert_eq!(h.logic.store().len(), 4);
}

#[test]
fn delete_out_of_range_index_fails_atomically() {
    let mut h = harness_with(typical_five());
    let err = h.logic.execute("delete 1 9").unwrap_err();
    assert!(matches!(
        err,
        Error::Command(CommandError::InvalidDisplayedIndex)
    ));
    assert_eq!(err.to_string(), "The person index provided is invalid");
    assert_eq!(h.logic.store().len(), 5, "nothing was removed");
}

#[test]
fn delete_unknown_name_fails() {
    let mut h = harness_with(typical_five());
    let err = h.logic.execute("del n:Zed Yam").unwrap_err();
    assert!(matches!(
        err,
        Error::Command(CommandError::PersonNotFound { .. })
    ));
    assert_eq!(h.logic.store().len(), 5);
}

#[test]
fn delete_aliases_behave_like_delete() {
    let mut h = harness_with(typical_five());
    feedback(&mut h, "del 1");
    feedback(&mut h, "rm 1");
    assert_eq!(h.logic.store().len(), 3);
}

// -----------------------------------------------------------------------------
// export
// -----------------------------------------------------------------------------

#[test]
fn export_writes_the_displayed_list() {
    let mut h = harness_with(typical_five());
    feedback(&mut h, "listsession G1");
    let feedback = feedback(&mut h, "export");
    assert!(feedback.starts_with("Exported 2 contact(s) to "), "{feedback}");

    let path = h.export_dir.join("contacts-20240304-050607.csv");
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("Name,Telegram,Email,Type,Session\n"));
    assert!(contents.contains("Alice Tan"));
    assert!(!contents.contains("Carl Wu"), "filtered out of the export");
}

#[test]
fn export_with_no_displayed_contacts_fails_before_io() {
    let mut h = harness();
    let err = h.logic.execute("export").unwrap_err();
    assert!(matches!(
        err,
        Error::Command(CommandError::NoContactsToExport)
    ));
    assert!(!h.export_dir.exists(), "no directory was created");
}

// -----------------------------------------------------------------------------
// clear / help / exit / unknown
// -----------------------------------------------------------------------------

#[test]
fn clear_empties_the_store() {
    let mut h = harness_with(typical_five());
    assert_eq!(feedback(&mut h, "clear"), "Contact list has been cleared!");
    assert!(h.logic.store().is_empty());
    assert_eq!(h.logic.store().counter().unique_session_count(), 0);
}

#[test]
fn exit_sets_the_exit_flag() {
    let mut h = harness();
    let result = h.logic.execute("exit").unwrap();
    assert!(result.exit);
}

#[test]
fn help_lists_the_commands() {
    let mut h = harness();
    let feedback = feedback(&mut h, "help");
    for word in ["add", "delete", "undo", "export", "sessions"] {
        assert!(feedback.contains(word), "help should mention {word}");
    }
}

#[test]
fn unknown_command_is_a_parse_error() {
    let mut h = harness();
    let err = h.logic.execute("unknownCommand").unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::UnknownCommand)));
    assert_eq!(err.to_string(), "Unknown command");
}

#[test]
fn add_then_type_matters_for_cross_field_rule_only_at_execute() {
    // A TA needs a session just like a student.
    let mut h = harness();
    let err = h
        .logic
        .execute("add n/Tia p/900 e/t@x.com t/ta")
        .unwrap_err();
    assert!(matches!(err, Error::Command(CommandError::MissingSession)));

    // An instructor parses fine without one and is added.
    feedback(&mut h, "add n/Prof Lee p/901 e/l@x.com t/instructor");
    assert_eq!(
        h.logic.store().persons()[0].person_type,
        PersonType::Instructor
    );
}

#[test]
fn builder_covers_every_field() {
    let person = PersonBuilder::new().build();
    assert_eq!(person.person_type, PersonType::Student);
    assert!(person.session.is_some());

    let ta = PersonBuilder::new()
        .name("Tia Ho")
        .phone("911")
        .email("tia@x.com")
        .person_type(PersonType::Ta)
        .telegram(None)
        .session(Some("T2"))
        .build();
    assert_eq!(ta.person_type, PersonType::Ta);
    assert_eq!(ta.phone.as_str(), "911");
}
