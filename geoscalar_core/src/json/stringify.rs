use super::JsonValue;

pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::String(s) => format!("\"{}\"", escape_json_string(s)),
		JsonValue::Number(n) if n.is_finite() => n.to_string(),
		JsonValue::Number(_) => String::from("null"),
		JsonValue::Boolean(b) => b.to_string(),
		JsonValue::Null => String::from("null"),
		JsonValue::Array(arr) => arr.stringify(),
		JsonValue::Object(obj) => obj.stringify(),
	}
}

pub fn escape_json_string(input: &str) -> String {
	input
		.chars()
		.map(|c| match c {
			'"' => "\\\"".to_string(),
			'\\' => "\\\\".to_string(),
			'\n' => "\\n".to_string(),
			'\r' => "\\r".to_string(),
			'\t' => "\\t".to_string(),
			'\u{08}' => "\\b".to_string(),
			'\u{0c}' => "\\f".to_string(),
			c if c.is_control() => format!("\\u{:04x}", c as u32),
			c => c.to_string(),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::json::parse_json_str;
	use anyhow::Result;
	use rstest::rstest;

	#[rstest]
	#[case("\"Hello, World!\"", "\"Hello, World!\"")]
	#[case("42", "42")]
	#[case("102.5", "102.5")]
	#[case("-0.25", "-0.25")]
	#[case("true", "true")]
	#[case("null", "null")]
	#[case("[ 100.0, 0.0 ]", "[100,0]")]
	#[case(r#"{ "type": "Point", "coordinates": [1, 2] }"#, r#"{"coordinates":[1,2],"type":"Point"}"#)]
	fn stringify_after_parse(#[case] input: &str, #[case] expected: &str) -> Result<()> {
		assert_eq!(stringify(&parse_json_str(input)?), expected);
		Ok(())
	}

	#[test]
	fn non_finite_numbers_become_null() {
		assert_eq!(stringify(&JsonValue::Number(f64::NAN)), "null");
		assert_eq!(stringify(&JsonValue::Number(f64::INFINITY)), "null");
	}

	#[test]
	fn escape_control_characters() {
		assert_eq!(escape_json_string("a\"b\\c\nd\te"), "a\\\"b\\\\c\\nd\\te");
		assert_eq!(escape_json_string("\u{01}"), "\\u0001");
		assert_eq!(escape_json_string("Köln"), "Köln");
	}
}
