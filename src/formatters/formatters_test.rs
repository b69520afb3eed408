#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::testing::{page, summaries};
    use serde_json::Value;

    #[test]
    fn test_text_lists_title_id_and_thumbnail() {
        let results = page(summaries("m", 2), 1, 3);

        let text = format_page_text("moon", &results, false);

        assert!(text.starts_with("Page 1 of 3 (75 results for \"moon\"):"));
        assert!(text.contains("Photo m0 [m0]\n  https://farm66.static.flickr.com/65535/m0_secretm0_m.jpg"));
        assert!(text.contains("Photo m1 [m1]"));
    }

    #[test]
    fn test_text_untitled_and_empty() {
        let mut photos = summaries("m", 1);
        photos[0].title = " ".to_string();
        let text = format_page_text("moon", &page(photos, 1, 1), false);
        assert!(text.contains("(untitled) [m0]"));

        let text = format_page_text("zzz", &page(Vec::new(), 1, 0), false);
        assert_eq!(text, "No photos found for \"zzz\".");
    }

    #[test]
    fn test_json_document() {
        let mut output = Vec::new();

        write_json(&mut output, "rover", &page(summaries("r", 2), 2, 4)).unwrap();

        let value: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["query"], "rover");
        assert_eq!(value["page"], 2);
        assert_eq!(value["page_count"], 4);
        assert_eq!(value["returned_count"], 2);
        assert_eq!(value["results"][1]["id"], "r1");
        assert_eq!(
            value["results"][0]["thumbnail_url"],
            "https://farm66.static.flickr.com/65535/r0_secretr0_m.jpg"
        );
    }

    #[test]
    fn test_jsonl_lines_end_with_metadata() {
        let mut output = Vec::new();

        write_jsonl(&mut output, "rocket", &page(summaries("k", 3), 1, 1)).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);

        let first: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["title"], "Photo k0");

        let last: Value = serde_json::from_str(lines[3]).unwrap();
        assert_eq!(last["_metadata"]["query"], "rocket");
        assert_eq!(last["_metadata"]["returned_count"], 3);
    }
}
