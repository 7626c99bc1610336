//! Accessor composition through the public API.

use memberspec_codegen::{
    AnnotationSpec, Argument, Conventions, DocLine, Error, FieldDescription, MemberSpecs,
    MethodSpec, Modifier, ModifierSet, TypeRef,
};

fn expanded_body(spec: &MethodSpec) -> Vec<String> {
    spec.body().statements().iter().map(|s| s.expand()).collect()
}

#[test]
fn test_getter() {
    let getter = MemberSpecs::new().getter("name", TypeRef::string()).unwrap();

    assert_eq!(getter.name(), "getName");
    assert_eq!(getter.return_type(), Some(&TypeRef::string()));
    assert_eq!(getter.modifiers(), &ModifierSet::from([Modifier::Public]));
    assert!(getter.params().is_empty());
    assert!(getter.annotations().is_empty());
    assert!(getter.exceptions().is_empty());
    assert_eq!(expanded_body(&getter), vec!["return this.name"]);

    let doc = getter.doc().expect("getter documentation");
    assert_eq!(doc.len(), 2);
    assert!(matches!(doc.lines()[1], DocLine::Returns(_)));
}

#[test]
fn test_setter() {
    let setter = MemberSpecs::new().setter("name", TypeRef::string()).unwrap();

    assert_eq!(setter.name(), "setName");
    assert_eq!(setter.return_type(), None);
    assert_eq!(setter.modifiers(), &ModifierSet::from([Modifier::Public]));
    assert_eq!(setter.params().len(), 1);

    let param = &setter.params()[0];
    assert_eq!(param.name, "name");
    assert_eq!(param.ty, TypeRef::string());
    assert_eq!(param.modifiers, ModifierSet::from([Modifier::Final]));

    assert_eq!(expanded_body(&setter), vec!["this.name = name"]);
    assert_eq!(setter.doc().map(|d| d.len()), Some(1));
}

#[test]
fn test_accessor_field_validation() {
    let specs = MemberSpecs::new();
    let field_error = Err(Error::InvalidArgument(Argument::Field));

    assert_eq!(specs.getter("", TypeRef::string()), field_error);
    assert_eq!(specs.getter("x", None), field_error);
    assert_eq!(specs.setter("", TypeRef::string()), field_error);
    assert_eq!(specs.setter("x", None), field_error);
    assert_eq!(
        specs.getter_builder("", TypeRef::int()).map(|b| b.build()),
        field_error
    );
}

#[test]
fn test_accessors_from_field_description() {
    let field = FieldDescription::new("createdAt", TypeRef::named("java.time.Instant"));
    let specs = MemberSpecs::new();

    let getter = specs.getter(&field, field.ty.clone()).unwrap();
    let setter = specs.setter(&field, field.ty.clone()).unwrap();

    assert_eq!(getter.name(), "getCreatedAt");
    assert_eq!(setter.name(), "setCreatedAt");
    assert_eq!(setter.params()[0].ty, field.ty);
}

#[test]
fn test_only_first_letter_changes() {
    let specs = MemberSpecs::new();
    assert_eq!(specs.setter("URL", TypeRef::string()).unwrap().name(), "setURL");
    assert_eq!(specs.getter("iPhone", TypeRef::string()).unwrap().name(), "getIPhone");
}

#[test]
fn test_builder_extension_seam() {
    let getter = MemberSpecs::new()
        .getter_builder("items", TypeRef::generic("java.util.List", vec![TypeRef::string()]))
        .unwrap()
        .annotation(AnnotationSpec::new("java.lang.Override"))
        .exception(TypeRef::named("java.lang.IllegalStateException"))
        .access(Modifier::Protected)
        .modifier(Modifier::Synchronized)
        .build();

    assert_eq!(getter.name(), "getItems");
    assert_eq!(
        getter.modifiers().to_vec(),
        vec![Modifier::Protected, Modifier::Synchronized]
    );
    assert_eq!(getter.annotations().len(), 1);
    assert_eq!(getter.exceptions().len(), 1);
    assert_eq!(expanded_body(&getter), vec!["return this.items"]);
}

#[test]
fn test_builder_and_terminal_forms_agree() {
    let specs = MemberSpecs::new();
    assert_eq!(
        specs.setter_builder("age", TypeRef::int()).unwrap().build(),
        specs.setter("age", TypeRef::int()).unwrap()
    );
    assert_eq!(
        specs.getter_builder("age", TypeRef::int()).unwrap().build(),
        specs.getter("age", TypeRef::int()).unwrap()
    );
}

#[test]
fn test_custom_conventions() {
    let conventions: Conventions = r#"
        getter-prefix = "read"
        setter-prefix = "write"
        accessor-modifiers = ["protected", "final"]
        setter-parameter-modifiers = []
        documentation = false
    "#
    .parse()
    .unwrap();
    let specs = MemberSpecs::with_conventions(conventions);

    let getter = specs.getter("value", TypeRef::double()).unwrap();
    assert_eq!(getter.name(), "readValue");
    assert!(getter.doc().is_none());
    assert_eq!(
        getter.modifiers().to_vec(),
        vec![Modifier::Protected, Modifier::Final]
    );

    let setter = specs.setter("value", TypeRef::double()).unwrap();
    assert_eq!(setter.name(), "writeValue");
    assert!(setter.params()[0].modifiers.is_empty());
}

#[test]
fn test_composer_is_shareable_across_threads() {
    let specs = std::sync::Arc::new(MemberSpecs::new());

    let handles: Vec<_> = ["alpha", "beta", "gamma", "delta"]
        .into_iter()
        .map(|name| {
            let specs = std::sync::Arc::clone(&specs);
            std::thread::spawn(move || {
                let getter = specs.getter(name, TypeRef::int()).unwrap();
                getter.name().to_string()
            })
        })
        .collect();

    let names: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(names, vec!["getAlpha", "getBeta", "getGamma", "getDelta"]);
}

#[test]
fn test_setter_parameters_match_setter() {
    let specs = MemberSpecs::new();
    let field = FieldDescription::new("balance", TypeRef::double());

    let params = specs.setter_parameters(&field, field.ty.clone()).unwrap();
    let setter = specs.setter(&field, field.ty.clone()).unwrap();
    assert_eq!(params.as_slice(), setter.params());

    assert_eq!(
        specs.setter_parameters("", TypeRef::double()),
        Err(Error::InvalidArgument(Argument::Field))
    );
}

#[test]
fn test_finalized_method_rejects_unnamed_json() {
    let getter = MemberSpecs::new().getter("name", TypeRef::string()).unwrap();
    let mut value = serde_json::to_value(&getter).unwrap();

    let back: MethodSpec = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(back, getter);

    value["name"] = serde_json::json!("");
    let err = serde_json::from_value::<MethodSpec>(value).unwrap_err();
    assert!(err.to_string().contains("methodName"));
}

#[test]
fn test_getter_snapshot() {
    let getter = MemberSpecs::new().getter("name", TypeRef::string()).unwrap();
    insta::assert_json_snapshot!(getter, @r#"
    {
      "name": "getName",
      "doc": {
        "lines": [
          {
            "text": {
              "format": "Gets the $L.",
              "args": [
                "name"
              ]
            }
          },
          {
            "returns": {
              "format": "Returns the $L.",
              "args": [
                "name"
              ]
            }
          }
        ]
      },
      "modifiers": [
        "public"
      ],
      "return_type": {
        "named": "java.lang.String"
      },
      "annotations": [],
      "exceptions": [],
      "params": [],
      "body": {
        "statements": [
          {
            "format": "return this.$L",
            "args": [
              "name"
            ]
          }
        ]
      }
    }
    "#);
}

#[test]
fn test_setter_json() {
    let setter = MemberSpecs::new().setter("name", TypeRef::string()).unwrap();
    let value = serde_json::to_value(&setter).unwrap();

    assert_eq!(value["name"], "setName");
    assert_eq!(value["return_type"], serde_json::Value::Null);
    assert_eq!(
        value["params"],
        serde_json::json!([{
            "name": "name",
            "ty": { "named": "java.lang.String" },
            "modifiers": ["final"],
            "annotations": []
        }])
    );
    assert_eq!(
        value["body"]["statements"][0],
        serde_json::json!({ "format": "this.$L = $L", "args": ["name", "name"] })
    );
}
