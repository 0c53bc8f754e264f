//! Symbol map for UML class diagrams
//!
//! Maps source-language keywords to the glyphs and stereotypes Mermaid
//! understands. Everything here is a static lookup; nothing is configurable.

use std::fmt;

/// Arrow used for every inheritance and implementation edge
pub const INHERITANCE_ARROW: &str = "<|--";

/// Access modifier of a type or member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,    // +
    Private,   // -
    Protected, // #
    Internal,  // ~
}

impl Visibility {
    pub const KEYWORDS: [&'static str; 4] = ["public", "private", "protected", "internal"];

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Visibility::Public),
            "private" => Some(Visibility::Private),
            "protected" => Some(Visibility::Protected),
            "internal" => Some(Visibility::Internal),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::Internal => "internal",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Private => '-',
            Visibility::Protected => '#',
            Visibility::Internal => '~',
        }
    }

    /// Whether a trimmed source line starts with an access modifier keyword
    pub fn starts_line(line: &str) -> bool {
        Self::KEYWORDS.iter().any(|keyword| {
            line.strip_prefix(keyword)
                .is_some_and(|rest| rest.is_empty() || !is_ident_char(rest.chars().next()))
        })
    }
}

fn is_ident_char(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_alphanumeric() || c == '_')
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Declaration modifier keywords that may follow the access modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Static,
    Virtual,
    Override,
    Abstract,
    Sealed,
    Readonly,
    Const,
    New,
    Async,
    Extern,
    Partial,
    Volatile,
    Unsafe,
    Required,
}

impl Modifier {
    pub const ALL: [Modifier; 14] = [
        Modifier::Static,
        Modifier::Virtual,
        Modifier::Override,
        Modifier::Abstract,
        Modifier::Sealed,
        Modifier::Readonly,
        Modifier::Const,
        Modifier::New,
        Modifier::Async,
        Modifier::Extern,
        Modifier::Partial,
        Modifier::Volatile,
        Modifier::Unsafe,
        Modifier::Required,
    ];

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.keyword() == keyword)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Static => "static",
            Modifier::Virtual => "virtual",
            Modifier::Override => "override",
            Modifier::Abstract => "abstract",
            Modifier::Sealed => "sealed",
            Modifier::Readonly => "readonly",
            Modifier::Const => "const",
            Modifier::New => "new",
            Modifier::Async => "async",
            Modifier::Extern => "extern",
            Modifier::Partial => "partial",
            Modifier::Volatile => "volatile",
            Modifier::Unsafe => "unsafe",
            Modifier::Required => "required",
        }
    }
}

/// Classifier suffix for methods (abstract, static)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classifier {
    Abstract, // *
    Static,   // $
}

impl Classifier {
    pub fn to_char(self) -> char {
        match self {
            Classifier::Abstract => '*',
            Classifier::Static => '$',
        }
    }
}

/// Class-level annotation line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stereotype {
    Abstract,
    Static,
}

impl Stereotype {
    pub fn annotation(self) -> &'static str {
        match self {
            Stereotype::Abstract => "<<abstract>>",
            Stereotype::Static => "<<static>>",
        }
    }
}

impl fmt::Display for Stereotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.annotation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_glyphs() {
        assert_eq!(Visibility::Public.glyph(), '+');
        assert_eq!(Visibility::Private.glyph(), '-');
        assert_eq!(Visibility::Protected.glyph(), '#');
        assert_eq!(Visibility::Internal.glyph(), '~');
    }

    #[test]
    fn test_visibility_keywords_round_trip() {
        for keyword in Visibility::KEYWORDS {
            let visibility = Visibility::from_keyword(keyword).unwrap();
            assert_eq!(visibility.keyword(), keyword);
        }
        assert_eq!(Visibility::from_keyword("friend"), None);
    }

    #[test]
    fn test_starts_line_requires_whole_keyword() {
        assert!(Visibility::starts_line("public int Count"));
        assert!(Visibility::starts_line("internal class Foo"));
        assert!(!Visibility::starts_line("publicity = 3;"));
        assert!(!Visibility::starts_line("// public int Count"));
        assert!(!Visibility::starts_line("int count;"));
    }

    #[test]
    fn test_modifier_lookup() {
        assert_eq!(Modifier::from_keyword("static"), Some(Modifier::Static));
        assert_eq!(Modifier::from_keyword("override"), Some(Modifier::Override));
        assert_eq!(Modifier::from_keyword("required"), Some(Modifier::Required));
        assert_eq!(Modifier::from_keyword("class"), None);
    }

    #[test]
    fn test_classifier_and_stereotype() {
        assert_eq!(Classifier::Abstract.to_char(), '*');
        assert_eq!(Classifier::Static.to_char(), '$');
        assert_eq!(Stereotype::Abstract.to_string(), "<<abstract>>");
        assert_eq!(Stereotype::Static.to_string(), "<<static>>");
    }
}
