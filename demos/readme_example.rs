use dtcg_core::{parse_dtcg, DtcgParserConfig};
use serde::Serialize;
use serde_json::{json, Value};
use std::cell::RefCell;

#[derive(Debug, Serialize)]
struct FlattenedToken {
    path: String,
    #[serde(rename = "$type")]
    token_type: Option<Value>,
    #[serde(rename = "$value")]
    value: Option<Value>,
}

fn main() {
    let dtcg_data = json!({
        "$description": "example data",
        "brand": {
            "$type": "color",
            "primary": {
                "$value": "#123456",
            },
            "secondary": {
                "$value": "#654321",
                "$type": "dimension",
            },
        },
    });

    let tokens = RefCell::new(Vec::new());

    parse_dtcg(
        &dtcg_data,
        DtcgParserConfig::<(), ()> {
            handle_design_token: Box::new(|path, combined, _, _, _| {
                tokens.borrow_mut().push(FlattenedToken {
                    path: path.join("."),
                    token_type: combined.get("$type").cloned(),
                    value: combined.get("$value").cloned(),
                });
            }),
            handle_group: None,
            add_to_group: None,
            format: None,
        },
    )
    .expect("example data is a valid document");

    // brand.primary inherits $type "color" from the brand group;
    // brand.secondary keeps its own "dimension".
    let flattened = serde_json::to_string_pretty(&tokens.into_inner()).unwrap();
    println!("{flattened}");
}
