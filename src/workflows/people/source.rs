use super::MarkupError;
use roxmltree::{Document, Node, ParsingOptions};
use std::collections::HashMap;

/// Field name to raw text for one record, as it appeared in the document.
/// Fields whose element is missing are absent from the map.
pub type FieldMap = HashMap<String, String>;

pub const PERSON_FIELDS: [&str; 5] = ["Name", "Age", "Department", "Salary", "HireDate"];

/// Turns a markup document into one field map per record.
pub trait PersonSource {
    fn records(&self, document: &str) -> Result<Vec<FieldMap>, MarkupError>;
}

/// Reads `<Person>` elements anywhere in an XML tree. Each field is the text
/// of the first direct child element with the field's name.
#[derive(Debug, Clone)]
pub struct XmlPersonSource {
    record_tag: &'static str,
    field_tags: &'static [&'static str],
}

impl Default for XmlPersonSource {
    fn default() -> Self {
        Self {
            record_tag: "Person",
            field_tags: &PERSON_FIELDS,
        }
    }
}

impl XmlPersonSource {
    pub fn new(record_tag: &'static str, field_tags: &'static [&'static str]) -> Self {
        Self {
            record_tag,
            field_tags,
        }
    }

    fn read_record(&self, record: Node<'_, '_>) -> FieldMap {
        self.field_tags
            .iter()
            .filter_map(|tag| {
                record
                    .children()
                    .find(|child| is_unqualified_element(*child, tag))
                    .map(|child| (tag.to_string(), element_text(child)))
            })
            .collect()
    }
}

impl PersonSource for XmlPersonSource {
    fn records(&self, document: &str) -> Result<Vec<FieldMap>, MarkupError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document = Document::parse_with_options(document, options)?;

        Ok(document
            .descendants()
            .filter(|node| is_unqualified_element(*node, self.record_tag))
            .map(|node| self.read_record(node))
            .collect())
    }
}

fn is_unqualified_element(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().namespace().is_none() && node.tag_name().name() == name
}

/// Concatenated text of every text node below `node`.
fn element_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|descendant| descendant.is_text())
        .filter_map(|descendant| descendant.text())
        .collect()
}
