use super::{group, split, DefinitionKind, RawDefinition};
use expect_test::expect;
use indoc::indoc;

#[test]
fn splits_adjacent_definitions() {
    let definitions = split("query A{f} fragment B_x on T{g}").unwrap();

    assert_eq!(
        definitions,
        vec![
            RawDefinition {
                kind: DefinitionKind::Query,
                name: "A",
                content: "query A{f}",
            },
            RawDefinition {
                kind: DefinitionKind::Fragment,
                name: "B_x",
                content: "fragment B_x on T{g}",
            },
        ]
    );
}

#[test]
fn ignores_surrounding_text() {
    let input = indoc! {r#"
        ## saved tab 3

        query A{f}

        (scratch notes)
    "#};

    let definitions = split(input).unwrap();

    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].content, "query A{f}");
}

#[test]
fn matches_keywords_mid_text() {
    let definitions = split("inquery A{f}").unwrap();

    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].name, "A");
    assert_eq!(definitions[0].content, "query A{f}");
}

#[test]
fn keeps_nested_braces_balanced() {
    let definitions = split("query A{f{g h{i}}}").unwrap();

    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].content, "query A{f{g h{i}}}");
}

#[test]
fn skips_variable_definitions_before_the_body() {
    let input = indoc! {r#"
        query Posts($first: Int) {
          posts(first: $first) {
            id
          }
        }
    "#};

    let definitions = split(input).unwrap();

    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].name, "Posts");
    assert_eq!(definitions[0].content, input.trim_end());
}

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(split("").unwrap(), vec![]);
    assert_eq!(split("no definitions in here").unwrap(), vec![]);
}

#[test]
fn missing_name_fails() {
    let error = split("query {f}").unwrap_err();

    assert_eq!(error.to_string(), "expected a name after `query` at offset 0");
}

#[test]
fn unterminated_body_fails() {
    let error = split("query A{f").unwrap_err();

    assert_eq!(error.to_string(), "definition `A` has an unterminated body");
}

#[test]
fn missing_body_fails() {
    let error = split("fragment B_x on T").unwrap_err();

    assert_eq!(error.to_string(), "definition `B_x` has an unterminated body");
}

#[test]
fn groups_queries_and_fragments_by_stem() {
    let input = indoc! {r#"
        query FooQuery {
          foo {
            id
          }
        }

        fragment Foo_user on User {
          name
        }
    "#};

    let definitions = split(input).unwrap();
    let files = group(&definitions);

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].filename, "Foo.graphql");

    let expected = expect![[r#"
        query FooQuery {
          foo {
            id
          }
        }

        fragment Foo_user on User {
          name
        }
    "#]];

    expected.assert_eq(&files[0].content);
}

#[test]
fn orders_files_alphabetically() {
    let definitions = split("query BQuery {b} query AQuery {a}").unwrap();
    let files = group(&definitions);

    let filenames: Vec<_> = files.iter().map(|file| file.filename.as_str()).collect();

    assert_eq!(filenames, vec!["A.graphql", "B.graphql"]);
}

#[test]
fn orders_same_kind_entries_by_content() {
    let definitions = split("fragment Foo_b on T {b} fragment Foo_a on T {a}").unwrap();
    let files = group(&definitions);

    assert_eq!(files.len(), 1);

    let expected = expect![[r#"
        fragment Foo_a on T {a}

        fragment Foo_b on T {b}
    "#]];

    expected.assert_eq(&files[0].content);
}

#[test]
fn names_without_conventions_pass_through() {
    let definitions = split("query Dashboard {d} fragment Avatar on User {a}").unwrap();
    let files = group(&definitions);

    let filenames: Vec<_> = files.iter().map(|file| file.filename.as_str()).collect();

    assert_eq!(filenames, vec!["Avatar.graphql", "Dashboard.graphql"]);
}
