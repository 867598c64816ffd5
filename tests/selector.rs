#[cfg(test)]
mod test {
    use bulk_sms_dispatcher::recipient::Recipient;
    use bulk_sms_dispatcher::recipient_selector::RecipientSelector;
    use uuid::Uuid;

    fn recipient(
        display_name: &str,
        email: Option<&str>,
        phone_number: Option<&str>,
    ) -> Recipient {
        Recipient {
            identifier: Uuid::now_v7(),
            display_name: display_name.to_string(),
            email: email.map(|it| it.to_string()),
            phone_number: phone_number.map(|it| it.to_string()),
        }
    }

    #[test]
    fn should_never_show_recipients_without_contact_address() {
        let addressable = recipient("Ana Silva", Some("ana@example.com"), Some("+15551111111"));
        let missing = recipient("Bo Chen", Some("bo@example.com"), None);
        let invalid = recipient("Cal Reyes", Some("cal@example.com"), Some("not-a-number"));

        let selector = RecipientSelector::new(vec![addressable.clone(), missing, invalid]);

        let candidates = selector.visible_candidates();
        assert_eq!(1, candidates.len());
        assert_eq!(addressable.identifier, candidates[0].identifier);
    }

    #[test]
    fn should_exclude_already_selected_recipients() {
        let first = recipient("Ana Silva", None, Some("+15551111111"));
        let second = recipient("Bo Chen", None, Some("+15552222222"));

        let mut selector = RecipientSelector::new(vec![first.clone(), second.clone()]);
        selector.add_to_set(first.identifier);

        let candidates = selector.visible_candidates();
        assert_eq!(1, candidates.len());
        assert_eq!(second.identifier, candidates[0].identifier);
    }

    #[test]
    fn should_filter_case_insensitively_over_name_email_and_phone() {
        let by_name = recipient("Ana Silva", Some("a@example.com"), Some("+15551111111"));
        let by_email = recipient("Bo Chen", Some("bo.chen@garage.com"), Some("+15552222222"));
        let by_phone = recipient("Cal Reyes", Some("cal@example.com"), Some("+15559999999"));

        let mut selector = RecipientSelector::new(vec![by_name.clone(), by_email.clone(), by_phone.clone()]);

        selector.set_filter_text("ANA");
        assert_eq!(vec![by_name.identifier], selector.visible_candidates().iter().map(|it| it.identifier).collect::<Vec<_>>());

        selector.set_filter_text("garage");
        assert_eq!(vec![by_email.identifier], selector.visible_candidates().iter().map(|it| it.identifier).collect::<Vec<_>>());

        selector.set_filter_text("9999");
        assert_eq!(vec![by_phone.identifier], selector.visible_candidates().iter().map(|it| it.identifier).collect::<Vec<_>>());

        selector.set_filter_text("");
        assert_eq!(3, selector.visible_candidates().len());

        selector.set_filter_text("no such recipient");
        assert!(selector.visible_candidates().is_empty());
    }

    #[test]
    fn should_keep_candidates_in_roster_order() {
        let first = recipient("Zoe Park", None, Some("+15551111111"));
        let second = recipient("Ana Silva", None, Some("+15552222222"));

        let selector = RecipientSelector::new(vec![first.clone(), second.clone()]);

        let candidates = selector.visible_candidates();
        assert_eq!(first.identifier, candidates[0].identifier);
        assert_eq!(second.identifier, candidates[1].identifier);
    }

    #[test]
    fn should_add_to_set_idempotently() {
        let target = recipient("Ana Silva", None, Some("+15551111111"));
        let mut selector = RecipientSelector::new(vec![target.clone()]);

        selector.add_to_set(target.identifier);
        selector.add_to_set(target.identifier);

        assert_eq!(1, selector.recipient_set().len());
    }

    #[test]
    fn should_ignore_nil_identifier_on_add() {
        let mut selector = RecipientSelector::new(vec![]);

        selector.add_to_set(Uuid::nil());

        assert!(selector.recipient_set().is_empty());
    }

    #[test]
    fn should_remove_from_set_with_no_op_on_absent() {
        let first = recipient("Ana Silva", None, Some("+15551111111"));
        let second = recipient("Bo Chen", None, Some("+15552222222"));

        let mut selector = RecipientSelector::new(vec![first.clone(), second.clone()]);
        selector.add_to_set(first.identifier);
        selector.add_to_set(second.identifier);

        selector.remove_from_set(first.identifier);
        assert_eq!(vec![second.identifier], selector.recipient_set().to_vec());

        selector.remove_from_set(first.identifier);
        assert_eq!(vec![second.identifier], selector.recipient_set().to_vec());
    }

    #[test]
    fn should_resolve_identifiers_against_the_roster_snapshot() {
        let known = recipient("Ana Silva", None, Some("+15551111111"));
        let selector = RecipientSelector::new(vec![known.clone()]);

        assert!(selector.resolve(&known.identifier).is_some());
        assert!(selector.resolve(&Uuid::now_v7()).is_none());
    }
}
