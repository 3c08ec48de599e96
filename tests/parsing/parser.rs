#[cfg(test)]
mod verify {
    use questionnaire::language::*;
    use questionnaire::parsing::parser::{classify, parse_questionnaire, Directive, Parser};

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    #[test]
    fn classifying_lines() {
        assert_eq!(classify("# Food"), Directive::Category("Food"));
        assert_eq!(classify("#"), Directive::Category(""));
        assert_eq!(classify("(Breakfast)"), Directive::Subcategory("Breakfast"));
        assert_eq!(classify("(  Breakfast )"), Directive::Subcategory("Breakfast"));
        assert_eq!(classify("()"), Directive::Subcategory(""));
        assert_eq!(classify("*   Toast  "), Directive::Option("Toast"));
        assert_eq!(classify("? With jam"), Directive::Explanation("With jam"));

        // first matching rule wins
        assert_eq!(classify("#(Breakfast)"), Directive::Category("(Breakfast)"));
        assert_eq!(classify("(Breakfast) * x)"), Directive::Subcategory("Breakfast) * x"));
        assert_eq!(classify("*?"), Directive::Option("?"));

        // needs both parenthesis to be a subcategory
        assert_eq!(classify("(Breakfast"), Directive::Unrecognized);
        assert_eq!(classify("Breakfast)"), Directive::Unrecognized);
        assert_eq!(classify("- Toast"), Directive::Unrecognized);
    }

    #[test]
    fn single_option_with_explanation() {
        let document = parse_questionnaire("# A\n(B)\n* C\n? D");

        let expected = Document {
            categories: vec![Category {
                name: "A",
                subcategories: vec![Subcategory {
                    name: "B",
                    items: vec![Item {
                        text: "C",
                        explanation: Some("D"),
                    }],
                }]
                .into_iter()
                .collect(),
            }]
            .into_iter()
            .collect(),
        };

        assert_eq!(document, Ok(expected));
    }

    #[test]
    fn categories_in_declaration_order() {
        let document = parse_questionnaire(trim(
            r#"
# A
(S)
* one
# Z
# M
(S)
* two
            "#,
        ))
        .unwrap();

        let names: Vec<&str> = document
            .categories
            .names()
            .collect();
        assert_eq!(names, vec!["A", "Z", "M"]);
    }

    #[test]
    fn subcategories_and_options_in_order() {
        let document = parse_questionnaire(trim(
            r#"
# Food
(Lunch)
* Sandwich
* Salad
(Breakfast)
* Toast
* Eggs
* Bacon
            "#,
        ))
        .unwrap();

        let food = document
            .category("Food")
            .unwrap();
        let names: Vec<&str> = food
            .subcategories
            .names()
            .collect();
        assert_eq!(names, vec!["Lunch", "Breakfast"]);

        let breakfast = food
            .subcategory("Breakfast")
            .unwrap();
        let texts: Vec<&str> = breakfast
            .items
            .iter()
            .map(|item| item.text)
            .collect();
        assert_eq!(texts, vec!["Toast", "Eggs", "Bacon"]);
        assert!(breakfast
            .items
            .iter()
            .all(|item| item
                .explanation
                .is_none()));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let compact = parse_questionnaire("# A\n(B)\n* C\n? D\n* E").unwrap();
        let spacious =
            parse_questionnaire("\n\n  \n# A\n\t\n(B)\n\n* C\n    \n\n? D\n\n* E\n\n").unwrap();

        assert_eq!(compact, spacious);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let document = parse_questionnaire("   #   A  \n\t( B )\n  *   C   \n ?  D ").unwrap();

        let item = &document
            .category("A")
            .unwrap()
            .subcategory("B")
            .unwrap()
            .items[0];
        assert_eq!(item.text, "C");
        assert_eq!(item.explanation, Some("D"));
    }

    #[test]
    fn carriage_returns_are_trimmed() {
        let unix = parse_questionnaire("# A\n(B)\n* C\n? D\n").unwrap();
        let windows = parse_questionnaire("# A\r\n(B)\r\n* C\r\n? D\r\n").unwrap();

        assert_eq!(unix, windows);
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        let plain = parse_questionnaire("# A\n(S)\n* O").unwrap();
        let marked = parse_questionnaire("\u{feff}# A\n(S)\n* O").unwrap();

        assert_eq!(plain, marked);
        assert_eq!(
            marked
                .categories
                .names()
                .collect::<Vec<_>>(),
            vec!["A"]
        );
    }

    #[test]
    fn last_explanation_wins() {
        let document = parse_questionnaire("# A\n(B)\n* C\n? first\n? second").unwrap();

        let items = &document
            .category("A")
            .unwrap()
            .subcategory("B")
            .unwrap()
            .items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].explanation, Some("second"));
    }

    #[test]
    fn explanation_attaches_to_latest_option() {
        let document = parse_questionnaire("# A\n(B)\n* first\n* second\n? about second").unwrap();

        let items = &document
            .category("A")
            .unwrap()
            .subcategory("B")
            .unwrap()
            .items;
        assert_eq!(items[0].explanation, None);
        assert_eq!(items[1].explanation, Some("about second"));
    }

    #[test]
    fn unrecognized_lines_are_skipped() {
        let document = parse_questionnaire(trim(
            r#"
Favourite foods survey
# Food
-- breakfast things --
(Breakfast)
* Toast
this line means nothing
? Buttered
(unfinished
            "#,
        ))
        .unwrap();

        let expected = parse_questionnaire("# Food\n(Breakfast)\n* Toast\n? Buttered").unwrap();
        assert_eq!(document, expected);
    }

    #[test]
    fn repeated_category_starts_over() {
        let document = parse_questionnaire(trim(
            r#"
# A
(S)
* one
# B
(T)
* two
# A
(U)
* three
            "#,
        ))
        .unwrap();

        let names: Vec<&str> = document
            .categories
            .names()
            .collect();
        assert_eq!(names, vec!["A", "B"]);

        let a = document
            .category("A")
            .unwrap();
        assert!(a
            .subcategory("S")
            .is_none());
        assert_eq!(
            a.subcategory("U")
                .unwrap()
                .items,
            vec![Item::new("three")]
        );
    }

    #[test]
    fn repeated_subcategory_starts_over() {
        let document = parse_questionnaire("# A\n(S)\n* one\n(T)\n* two\n(S)\n* three").unwrap();

        let a = document
            .category("A")
            .unwrap();
        let names: Vec<&str> = a
            .subcategories
            .names()
            .collect();
        assert_eq!(names, vec!["S", "T"]);
        assert_eq!(
            a.subcategory("S")
                .unwrap()
                .items,
            vec![Item::new("three")]
        );
    }

    #[test]
    fn empty_input() {
        let document = parse_questionnaire("").unwrap();
        assert!(document.is_empty());

        let document = parse_questionnaire("\n   \n\t\n").unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn empty_category_and_subcategory() {
        let document = parse_questionnaire("# A\n# B\n(S)").unwrap();

        assert!(document
            .category("A")
            .unwrap()
            .subcategories
            .is_empty());
        assert!(document
            .category("B")
            .unwrap()
            .subcategory("S")
            .unwrap()
            .items
            .is_empty());
        assert_eq!(document.count_items(), 0);
    }

    #[test]
    fn parsing_twice_is_the_same() {
        let content = trim(
            r#"
# Food
(Breakfast)
* Toast
? Buttered
* Eggs
(Dinner)
* Soup
# Drinks
(Hot)
* Tea
            "#,
        );

        let first = parse_questionnaire(content).unwrap();
        let second = parse_questionnaire(content).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn reusing_a_parser() {
        let mut input = Parser::new();

        input.initialize("# A\n(B)\n* C");
        let first = input
            .parse_from_start()
            .unwrap();
        assert_eq!(first.count_items(), 1);

        // nothing from the previous run carries over
        input.initialize("? D");
        assert!(input
            .parse_from_start()
            .is_err());

        input.initialize("# E");
        let third = input
            .parse_from_start()
            .unwrap();
        assert!(third
            .category("A")
            .is_none());
        assert!(third
            .category("E")
            .is_some());
    }

    #[test]
    fn reading_lines_one_at_a_time() {
        let mut input = Parser::new();
        input.initialize("");

        assert_eq!(input.read_line("# A"), Ok(()));
        assert_eq!(input.read_line("(B)"), Ok(()));
        assert_eq!(input.read_line("* C"), Ok(()));
        assert_eq!(input.read_line("not a directive"), Ok(()));
        assert_eq!(input.read_line("? D"), Ok(()));
    }

    #[test]
    fn json_output_shape() {
        let document = parse_questionnaire(trim(
            r#"
# Zoo
(Mammals)
* Zebra
? Striped
* Aardvark
(Birds)
# Aquarium
(Fish)
* Carp
            "#,
        ))
        .unwrap();

        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"Zoo":{"Mammals":[{"option":"Zebra","explanation":"Striped"},"#,
                r#"{"option":"Aardvark","explanation":null}],"Birds":[]},"#,
                r#""Aquarium":{"Fish":[{"option":"Carp","explanation":null}]}}"#
            )
        );
    }
}
