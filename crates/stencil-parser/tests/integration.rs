use stencil_parser::{Scanner, Segment};

fn placeholder_paths(input: &str) -> Vec<String> {
    Scanner::new(input)
        .filter_map(|s| match s {
            Segment::Placeholder(p) => Some(p.path.to_string()),
            Segment::Text(_) => None,
        })
        .collect()
}

#[test]
fn full_template_walkthrough() {
    let input = "Dear ${title} ${name}, your order $(order.id) ships on $[dates[0]].";
    let paths = placeholder_paths(input);
    assert_eq!(paths, vec!["title", "name", "order.id", "dates[0]"]);

    // Literal spans survive untouched, in order.
    let text: String = Scanner::new(input)
        .filter_map(|s| match s {
            Segment::Text(t) => Some(t),
            Segment::Placeholder(_) => None,
        })
        .collect();
    assert_eq!(text, "Dear  , your order  ships on .");
}

#[test]
fn filter_chains_across_styles() {
    for (input, closer_ok) in [
        ("${v | upper | pad: 4}", true),
        ("$(v | upper | pad: 4)", true),
        ("$<v | upper | pad: 4>", true),
        ("$[v | upper | pad: 4]", true),
        ("$/v | upper | pad: 4/", true),
        ("${v | upper | pad: 4)", false),
    ] {
        let found: Vec<_> = Scanner::new(input)
            .filter_map(|s| match s {
                Segment::Placeholder(p) => Some(p),
                Segment::Text(_) => None,
            })
            .collect();
        if closer_ok {
            assert_eq!(found.len(), 1, "expected a match for {input}");
            assert_eq!(found[0].filters.len(), 2);
            assert_eq!(found[0].filters[1].name, "pad");
            assert_eq!(found[0].filters[1].args, vec!["4"]);
        } else {
            assert!(found.is_empty(), "expected no match for {input}");
        }
    }
}

#[test]
fn mixed_json_payload_stays_intact() {
    // Braces belonging to surrounding JSON must not confuse the scanner.
    let input = r#"{"name": "${user.name}", "tags": []}"#;
    assert_eq!(placeholder_paths(input), vec!["user.name"]);

    let reassembled: String = Scanner::new(input)
        .map(|s| match s {
            Segment::Text(t) => t,
            Segment::Placeholder(p) => p.text,
        })
        .collect();
    assert_eq!(reassembled, input);
}

#[test]
fn many_placeholders_scan_linearly() {
    // Correctness at scale: 10k placeholders in one pass.
    let mut input = String::new();
    for i in 0..10_000 {
        input.push_str(&format!("$(prop_{i})"));
    }
    let count = Scanner::new(&input)
        .filter(|s| matches!(s, Segment::Placeholder(_)))
        .count();
    assert_eq!(count, 10_000);
}
