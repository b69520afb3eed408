#[cfg(test)]
mod tests {
    use super::super::text::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(html_to_text("Apollo 11 launch"), "Apollo 11 launch");
    }

    #[test]
    fn test_markup_is_dropped() {
        let html = r#"Photo by <a href="https://example.org" onclick="evil()">NASA</a>, <b>1969</b>"#;
        assert_eq!(html_to_text(html), "Photo by NASA, 1969");
    }

    #[test]
    fn test_script_tags_removed() {
        let text = html_to_text("Before<script>alert(1)</script>After");
        assert_eq!(text, "BeforeAfter");
    }

    #[test]
    fn test_non_text_element_contents_dropped() {
        let html = "Hello<script>alert('x')</script><style>p{color:red}</style> world";
        assert_eq!(html_to_text(html), "Hello world");

        let html = "<p>Caption<noscript>enable js</noscript></p><textarea>typed</textarea><p>Credit</p>";
        assert_eq!(html_to_text(html), "Caption\nCredit");
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(html_to_text("one<br>two<br/>three"), "one\ntwo\nthree");
        assert_eq!(html_to_text("line one\nline two"), "line one\nline two");
    }

    #[test]
    fn test_blank_lines_collapsed() {
        let text = html_to_text("<p>first</p><p></p><p>second</p><br><br><br>");
        assert_eq!(text, "first\nsecond");

        assert_eq!(html_to_text("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(html_to_text("Rock &amp; Roll"), "Rock & Roll");
    }

    #[test]
    fn test_empty_description() {
        assert_eq!(html_to_text(""), "");
    }

    #[test]
    fn test_format_taken() {
        assert_eq!(format_taken("1969-07-16 13:32:00"), "July 16, 1969");
        assert_eq!(format_taken("circa 1920"), "circa 1920");
    }
}
