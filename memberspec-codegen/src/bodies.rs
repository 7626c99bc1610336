//! Canonical accessor bodies and documentation.
//!
//! These are templates over the field name only; the field type never
//! influences them.

use crate::spec::{Body, Documentation, Template};

/// `this.<field> = <field>`
pub fn setter_body(field_name: &str) -> Body {
    Body::new().statement(Template::new("this.$L = $L").arg(field_name).arg(field_name))
}

/// `return this.<field>`
pub fn getter_body(field_name: &str) -> Body {
    Body::new().statement(Template::new("return this.$L").arg(field_name))
}

/// One line: "Sets the <field>."
pub fn setter_doc(field_name: &str) -> Documentation {
    Documentation::new().text(Template::new("Sets the $L.").arg(field_name))
}

/// Two lines: "Gets the <field>." and a return line "Returns the <field>."
pub fn getter_doc(field_name: &str) -> Documentation {
    Documentation::new()
        .text(Template::new("Gets the $L.").arg(field_name))
        .returns(Template::new("Returns the $L.").arg(field_name))
}
