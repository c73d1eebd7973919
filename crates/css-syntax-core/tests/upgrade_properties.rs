use css_syntax_core::prelude::*;
use proptest::prelude::*;

const TOKENS: [&str; 2] = ["<color>", "<length>"];

fn inline_rules() -> RuleSet {
    RuleSet::new(vec![
        ReplacementRule::new("<color>", "[<color>|<--alpha()>]"),
        ReplacementRule::new("<length>", "[<length>|<--spacing()>]"),
    ])
    .unwrap()
}

fn indirection_rules() -> RuleSet {
    RuleSet::tailwind()
}

fn grammar() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("<color>"),
            Just("<length>"),
            Just("<length-percentage>"),
            Just("<length [0,∞]>"),
            Just("<'color'>"),
            Just("<number>"),
            Just(" | "),
            Just(" || "),
            Just("auto"),
            Just("<"),
            Just(">"),
            Just("[ "),
            Just(" ]"),
            Just("{1,4}"),
            Just("#"),
        ],
        0..10,
    )
    .prop_map(|pieces| pieces.concat())
}

fn grammar_mapping() -> impl Strategy<Value = GrammarMapping> {
    prop::collection::vec(("[a-z][a-z-]{0,8}", grammar()), 0..12)
        .prop_map(|entries| entries.into_iter().collect::<GrammarMapping>())
}

fn at_rule_mapping() -> impl Strategy<Value = AtRuleMapping> {
    prop::collection::vec(
        (
            "[a-z][a-z-]{0,8}",
            prop::option::of(grammar()),
            prop::option::of(grammar_mapping()),
        ),
        0..6,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(name, prelude, descriptors)| {
                (
                    name,
                    AtRuleEntry {
                        prelude,
                        descriptors,
                        ..AtRuleEntry::default()
                    },
                )
            })
            .collect::<AtRuleMapping>()
    })
}

proptest! {
    #[test]
    fn prop_result_keys_are_exactly_substring_matches(source in grammar_mapping()) {
        let upgraded = upgrade_mapping(&source, &inline_rules());

        let expected: Vec<&String> = source
            .iter()
            .filter(|(_, syntax)| TOKENS.iter().any(|t| syntax.contains(t)))
            .map(|(name, _)| name)
            .collect();
        let actual: Vec<&String> = upgraded.keys().collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_result_matches_sequential_replace_all(source in grammar_mapping()) {
        let rules = inline_rules();
        let upgraded = upgrade_mapping(&source, &rules);

        for (name, syntax) in &upgraded {
            let mut expected = source[name].clone();
            for rule in &rules {
                expected = expected.replace(&rule.token, &rule.replacement);
            }
            prop_assert_eq!(syntax, &expected);
        }
    }

    #[test]
    fn prop_no_tokens_survive_indirection(source in grammar_mapping()) {
        let upgraded = upgrade_mapping(&source, &indirection_rules());
        for syntax in upgraded.values() {
            for token in TOKENS {
                prop_assert!(!syntax.contains(token), "{} still in {}", token, syntax);
            }
        }
    }

    #[test]
    fn prop_input_is_not_mutated(source in grammar_mapping(), atrules in at_rule_mapping()) {
        let types_before = source.clone();
        let atrules_before = atrules.clone();

        let _ = upgrade_mapping(&source, &inline_rules());
        let _ = upgrade_at_rules(&atrules, &inline_rules());

        prop_assert_eq!(source, types_before);
        prop_assert_eq!(atrules, atrules_before);
    }

    #[test]
    fn prop_at_rules_carry_over_whole_entry(atrules in at_rule_mapping()) {
        let rules = inline_rules();
        let upgraded = upgrade_at_rules(&atrules, &rules);

        for (name, entry) in &atrules {
            let candidate = entry
                .descriptors
                .as_ref()
                .is_some_and(|d| d.values().any(|s| rules.matches(s)));
            prop_assert_eq!(upgraded.contains_key(name), candidate);
        }

        for (name, out) in &upgraded {
            let original = &atrules[name];
            prop_assert_eq!(&out.prelude, &original.prelude);

            let before = original.descriptors.as_ref().unwrap();
            let after = out.descriptors.as_ref().unwrap();
            prop_assert_eq!(
                after.keys().collect::<Vec<_>>(),
                before.keys().collect::<Vec<_>>()
            );
            for (key, syntax) in before {
                if rules.matches(syntax) {
                    prop_assert_eq!(&after[key], &rules.apply(syntax));
                } else {
                    prop_assert_eq!(&after[key], syntax);
                }
            }
        }
    }

    #[test]
    fn prop_rerun_with_disjoint_tokens_is_stable(source in grammar_mapping()) {
        let rules = indirection_rules();
        let upgraded = upgrade_mapping(&source, &rules);

        for syntax in upgraded.values() {
            prop_assert_eq!(&rules.apply(syntax), syntax);
        }
        prop_assert!(upgrade_mapping(&upgraded, &rules).is_empty());
    }
}
