//! Textual rendering of a generated unit.
//!
//! The renderer owns the logical structure and ordering; whitespace
//! normalization is the formatter's job.

use crate::unit::{GeneratedUnit, PropertyPlan};
use notigen_schema::types::{
    CHANGED_EVENT, CHANGED_HANDLER, CHANGED_INTERFACE, CHANGING_EVENT, CHANGING_HANDLER,
    CHANGING_INTERFACE,
};

const CHANGING_ARGS: &str = "global::System.ComponentModel.PropertyChangingEventArgs";
const CHANGED_ARGS: &str = "global::System.ComponentModel.PropertyChangedEventArgs";
const EQUALITY_COMPARER: &str = "global::System.Collections.Generic.EqualityComparer";

/// Render one unit: namespace wrapper, partial type implementing both
/// notification capability markers, the needed event declarations
/// (changing before changed), then the properties in field order.
#[must_use]
pub fn render_unit(unit: &GeneratedUnit) -> String {
    let mut out = String::new();

    out.push_str(&format!("namespace {}\n{{\n", unit.namespace));
    out.push_str(&format!(
        "    public partial class {} : {CHANGING_INTERFACE}, {CHANGED_INTERFACE}\n    {{\n",
        unit.type_name
    ));

    if unit.emit_changing {
        out.push_str(&event_declaration(CHANGING_HANDLER, CHANGING_EVENT));
    }
    if unit.emit_changed {
        out.push_str(&event_declaration(CHANGED_HANDLER, CHANGED_EVENT));
    }

    for plan in &unit.properties {
        out.push_str(&property(plan));
    }

    out.push_str("    }\n}\n");
    out
}

fn event_declaration(handler: &str, ident: &str) -> String {
    format!(
        "        /// <inheritdoc/>\n        public event global::{handler} {ident};\n\n"
    )
}

// Setter order is load-bearing: equality guard, changing notification,
// assignment, changed notification.
fn property(plan: &PropertyPlan) -> String {
    let name = &plan.final_name;
    let ty = &plan.ty;
    let access = plan.access();
    let mut out = String::new();

    for line in &plan.doc {
        out.push_str(&format!("        {line}\n"));
    }

    out.push_str(&format!("        public {ty} {name}\n        {{\n"));
    out.push_str(&format!("            get => {access};\n"));
    out.push_str("            set\n            {\n");
    out.push_str(&format!(
        "                if ({EQUALITY_COMPARER}<{ty}>.Default.Equals({access}, value))\n                    return;\n\n"
    ));
    out.push_str(&format!(
        "                this.{CHANGING_EVENT}?.Invoke(this, new {CHANGING_ARGS}(\"{name}\"));\n\n"
    ));
    out.push_str(&format!("                {access} = value;\n\n"));
    out.push_str(&format!(
        "                this.{CHANGED_EVENT}?.Invoke(this, new {CHANGED_ARGS}(\"{name}\"));\n"
    ));
    out.push_str("            }\n        }\n\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use notigen_schema::types::Qualifier;

    fn plan(name: &str, ident: &str, qualifier: Qualifier) -> PropertyPlan {
        PropertyPlan {
            final_name: name.to_string(),
            field_ident: ident.to_string(),
            ty: "string".to_string(),
            qualifier,
            doc: Vec::new(),
        }
    }

    fn unit(properties: Vec<PropertyPlan>) -> GeneratedUnit {
        GeneratedUnit {
            namespace: "UnitTest".to_string(),
            type_name: "UnitTestClass".to_string(),
            emit_changing: true,
            emit_changed: true,
            properties,
        }
    }

    #[test]
    fn type_always_implements_both_markers() {
        let mut empty = unit(Vec::new());
        empty.emit_changing = false;
        empty.emit_changed = false;

        let source = render_unit(&empty);

        assert!(source.contains(
            "public partial class UnitTestClass : System.ComponentModel.INotifyPropertyChanging, System.ComponentModel.INotifyPropertyChanged"
        ));
        assert!(!source.contains("public event"));
    }

    #[test]
    fn changing_event_precedes_changed_event() {
        let source = render_unit(&unit(Vec::new()));

        let changing = source
            .find("PropertyChangingEventHandler PropertyChanging;")
            .expect("changing declared");
        let changed = source
            .find("PropertyChangedEventHandler PropertyChanged;")
            .expect("changed declared");

        assert!(changing < changed);
    }

    #[test]
    fn setter_sequence_is_guard_changing_assign_changed() {
        let source = render_unit(&unit(vec![plan(
            "NormalProperty",
            "normalProperty",
            Qualifier::InstanceQualified,
        )]));

        let guard = source
            .find("EqualityComparer<string>.Default.Equals(this.normalProperty, value)")
            .expect("guard present");
        let early_return = source.find("return;").expect("early return present");
        let changing = source
            .find("PropertyChangingEventArgs(\"NormalProperty\")")
            .expect("changing raise present");
        let assign = source
            .find("this.normalProperty = value;")
            .expect("assignment present");
        let changed = source
            .find("PropertyChangedEventArgs(\"NormalProperty\")")
            .expect("changed raise present");

        assert!(guard < early_return);
        assert!(early_return < changing);
        assert!(changing < assign);
        assert!(assign < changed);
    }

    #[test]
    fn static_storage_is_referenced_bare() {
        let source = render_unit(&unit(vec![plan(
            "StaticProperty",
            "staticProperty",
            Qualifier::Unqualified,
        )]));

        assert!(source.contains("get => staticProperty;"));
        assert!(source.contains("                staticProperty = value;"));
        // Notifications are still raised through the receiver.
        assert!(source.contains("this.PropertyChanging?.Invoke"));
        assert!(source.contains("this.PropertyChanged?.Invoke"));
    }

    #[test]
    fn properties_render_in_plan_order() {
        let source = render_unit(&unit(vec![
            plan("Property1", "property1", Qualifier::InstanceQualified),
            plan("Property2", "property2", Qualifier::InstanceQualified),
            plan("Property3", "property3", Qualifier::InstanceQualified),
        ]));

        let p1 = source.find("public string Property1").expect("p1");
        let p2 = source.find("public string Property2").expect("p2");
        let p3 = source.find("public string Property3").expect("p3");

        assert!(p1 < p2);
        assert!(p2 < p3);
    }
}
