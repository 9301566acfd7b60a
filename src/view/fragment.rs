//! A minimal renderable tree: the output of every view.
//!
//! `Display` serialises a fragment to HTML. [`Fragment::to_plain_text`] gives a terminal
//! friendly rendition, and [`Fragment::text_content`] the concatenated text nodes.

use std::fmt::{self, Display, Write};

/// Element kinds the views produce
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tag {
    Div,
    Paragraph,
    Link,
    List,
    ListItem,
}

impl Tag {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Paragraph => "p",
            Tag::Link => "a",
            Tag::List => "ul",
            Tag::ListItem => "li",
        }
    }

    const fn is_block(&self) -> bool {
        !matches!(self, Tag::Link)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    tag: Tag,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Fragment>,
}

impl Element {
    pub const fn new(tag: Tag) -> Element {
        Element {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute; attributes keep their insertion order when rendered
    pub fn attribute(mut self, name: &'static str, value: impl Into<String>) -> Element {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Fragment>) -> Element {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Element
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub const fn tag(&self) -> Tag {
        self.tag
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            child.collect_text(&mut text);
        }
        text
    }
}

/// A text node or an element
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Fragment {
    Text(String),
    Element(Element),
}

impl From<Element> for Fragment {
    fn from(element: Element) -> Self {
        Fragment::Element(element)
    }
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Fragment {
        Fragment::Text(text.into())
    }

    /// `<p>{text}</p>`
    pub fn paragraph(text: impl Into<String>) -> Fragment {
        Element::new(Tag::Paragraph).child(Fragment::text(text)).into()
    }

    /// Every text node, in document order, with no separators
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, text: &mut String) {
        match self {
            Fragment::Text(value) => text.push_str(value),
            Fragment::Element(element) => {
                for child in &element.children {
                    child.collect_text(text);
                }
            }
        }
    }

    /// The first element with `tag`, searching depth first in document order
    pub fn find(&self, tag: Tag) -> Option<&Element> {
        self.find_all(tag).into_iter().next()
    }

    /// Every element with `tag`, depth first in document order
    pub fn find_all(&self, tag: Tag) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_elements(tag, &mut found);
        found
    }

    fn collect_elements<'a>(&'a self, tag: Tag, found: &mut Vec<&'a Element>) {
        if let Fragment::Element(element) = self {
            if element.tag == tag {
                found.push(element);
            }
            for child in &element.children {
                child.collect_elements(tag, found);
            }
        }
    }

    /// Terminal rendition: one line per block element, links as `text <href>`
    pub fn to_plain_text(&self) -> String {
        let mut lines = vec![String::new()];
        self.collect_plain(&mut lines);
        lines.retain(|line| !line.is_empty());
        lines.join("\n")
    }

    fn collect_plain(&self, lines: &mut Vec<String>) {
        match self {
            Fragment::Text(value) => {
                if let Some(line) = lines.last_mut() {
                    line.push_str(value);
                }
            }
            Fragment::Element(element) => {
                if element.tag.is_block() {
                    lines.push(String::new());
                }
                for child in &element.children {
                    child.collect_plain(lines);
                }
                if let (Tag::Link, Some(href)) = (element.tag, element.get_attribute("href")) {
                    if let Some(line) = lines.last_mut() {
                        let _ = write!(line, " <{href}>");
                    }
                }
                if element.tag.is_block() {
                    lines.push(String::new());
                }
            }
        }
    }
}

fn escape_into(f: &mut fmt::Formatter<'_>, value: &str, quote: bool) -> fmt::Result {
    for c in value.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' if quote => f.write_str("&quot;")?,
            '\'' if quote => f.write_str("&#39;")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(f, " {name}=\"")?;
            escape_into(f, value, true)?;
            f.write_char('"')?;
        }
        f.write_char('>')?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.tag)
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Text(value) => escape_into(f, value, false),
            Fragment::Element(element) => Display::fmt(element, f),
        }
    }
}
