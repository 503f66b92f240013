use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

use crate::errors::{ConvertError, ConvertResult};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// An owned XML element: local tag name, leading text and child elements.
///
/// Only the text that appears before the first child element is kept, which
/// is all a leaf field ever carries. Attributes are not needed by any lookup
/// and are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) text: String,
    pub(crate) children: Vec<Element>,
}

impl Element {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Parse a complete document and return its root element.
    pub fn parse(bytes: &[u8]) -> ConvertResult<Self> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let mut reader = Reader::from_reader(bytes);
        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader.read_event_into(&mut buf).map_err(|e| {
                ConvertError::Xml(format!("{} at byte {}", e, reader.error_position()))
            })?;

            match event {
                Event::Start(ref e) => {
                    ensure_single_root(root.is_some(), &stack)?;
                    stack.push(Element::open(e)?);
                }
                Event::Empty(ref e) => {
                    ensure_single_root(root.is_some(), &stack)?;
                    let element = Element::open(e)?;
                    attach(&mut stack, &mut root, element);
                }
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        attach(&mut stack, &mut root, element);
                    }
                }
                Event::Text(ref t) => {
                    push_text(&mut stack, utf8(t)?)?;
                }
                Event::CData(ref c) => {
                    push_text(&mut stack, utf8(c)?)?;
                }
                Event::GeneralRef(ref r) => {
                    let resolved = match r.resolve_char_ref() {
                        Ok(Some(ch)) => ch.to_string(),
                        Ok(None) => {
                            let name = utf8(r)?;
                            resolve_predefined_entity(name)
                                .ok_or_else(|| {
                                    ConvertError::Xml(format!("Unknown entity &{};", name))
                                })?
                                .to_string()
                        }
                        Err(e) => return Err(ConvertError::Xml(e.to_string())),
                    };
                    push_text(&mut stack, &resolved)?;
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(ConvertError::Xml(format!("Unclosed element <{}>", open.name)));
        }

        root.ok_or_else(|| ConvertError::Xml("No root element found".to_string()))
    }

    fn open(start: &BytesStart<'_>) -> ConvertResult<Self> {
        let name = utf8(start.local_name().as_ref())?.to_string();
        Ok(Element {
            name,
            ..Default::default()
        })
    }
}

fn utf8(bytes: &[u8]) -> ConvertResult<&str> {
    std::str::from_utf8(bytes).map_err(|e| ConvertError::Xml(format!("Invalid UTF-8: {}", e)))
}

fn ensure_single_root(has_root: bool, stack: &[Element]) -> ConvertResult<()> {
    if has_root && stack.is_empty() {
        return Err(ConvertError::Xml("Multiple root elements".to_string()));
    }
    Ok(())
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn push_text(stack: &mut [Element], text: &str) -> ConvertResult<()> {
    match stack.last_mut() {
        Some(current) => {
            if current.children.is_empty() {
                current.text.push_str(text);
            }
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(ConvertError::Xml("Text outside the root element".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_nested_tree() {
        let root = Element::parse(b"<a><b>one</b><c><d>two</d></c></a>").unwrap();

        assert_eq!(root.name(), "a");
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].text(), "one");
        assert_eq!(root.children()[1].children()[0].name(), "d");
        assert_eq!(root.children()[1].children()[0].text(), "two");
    }

    #[test]
    fn test_parse_keeps_leading_text_only() {
        let root = Element::parse(b"<a>head<b/>tail</a>").unwrap();
        assert_eq!(root.text(), "head");
        assert_eq!(root.children()[0].text(), "");
    }

    #[test]
    fn test_parse_resolves_references_and_cdata() {
        let root = Element::parse(
            b"<a><b>Tom &amp; Jerry &#65;&#x42;</b><c><![CDATA[<raw>]]></c></a>",
        )
        .unwrap();

        assert_eq!(root.children()[0].text(), "Tom & Jerry AB");
        assert_eq!(root.children()[1].text(), "<raw>");
    }

    #[test]
    fn test_parse_strips_namespace_prefix_and_bom() {
        let mut input = UTF8_BOM.to_vec();
        input.extend_from_slice(
            br#"<?xml version="1.0"?><ns:a xmlns:ns="urn:x"><ns:b>1</ns:b></ns:a>"#,
        );

        let root = Element::parse(&input).unwrap();
        assert_eq!(root.name(), "a");
        assert_eq!(root.children()[0].name(), "b");
    }

    #[test]
    fn test_parse_keeps_whitespace_verbatim() {
        let root = Element::parse(b"<a><b>  12 </b></a>").unwrap();
        assert_eq!(root.children()[0].text(), "  12 ");
    }

    #[rstest]
    #[case::empty(b"".as_slice())]
    #[case::whitespace(b"   \n".as_slice())]
    #[case::unclosed(b"<a><b>1</b>".as_slice())]
    #[case::mismatched(b"<a><b>1</c></a>".as_slice())]
    #[case::two_roots(b"<a/><b/>".as_slice())]
    #[case::text_outside(b"junk<a/>".as_slice())]
    #[case::bad_utf8(b"<a>\xFF\xFE</a>".as_slice())]
    fn test_parse_rejects_malformed(#[case] input: &[u8]) {
        let result = Element::parse(input);
        assert!(matches!(result, Err(ConvertError::Xml(_))));
    }
}
