//! Parses a design token file written against the 1st editor's draft of the
//! DTCG spec (2021). There have been several breaking changes in the format
//! since then, so parsers targeting the latest drafts can't read these old
//! files. Switching the format profile makes the same handlers work for
//! both, with property names normalised to the `$`-prefixed syntax.

use dtcg_core::{parse_dtcg, DtcgParserConfig, DTCG_FIRST_DRAFT};
use serde_json::json;

fn main() {
    let first_draft_data = json!({
        "description": "root group description",
        "token1": {
            "value": 123,
        },
        "token2": {
            "value": 321,
        },
        "group": {
            "nestedGroup": {
                "token3": {
                    "type": "color",
                    "value": "#123456",
                },
            },
        },
    });

    parse_dtcg(
        &first_draft_data,
        DtcgParserConfig::<(), ()> {
            handle_design_token: Box::new(|path, combined, _, _, _| {
                println!(
                    "Found token \"{}\" with combined props: {}",
                    path.join("."),
                    serde_json::to_string(combined).unwrap()
                );
            }),
            handle_group: None,
            add_to_group: None,
            format: Some(&DTCG_FIRST_DRAFT),
        },
    )
    .expect("example data is a valid document");
}
