use symexpr::prelude::*;

fn var() -> Expression {
    Expression::new("self.var")
}

// Built in functions

#[test]
fn abs_built_in_function() {
    assert_eq!(var().abs().render(), "abs(self.var)");
    assert_eq!(Expression::new("x").abs().render(), "abs(x)");
}

#[test]
fn round_built_in_function() {
    assert_eq!(var().round_to(2).render(), "round(self.var, 2)");
    assert_eq!(Expression::new("x").round_to(2).render(), "round(x, 2)");
    assert_eq!(var().round().render(), "round(self.var)");
}

#[test]
fn reversed_built_in_function() {
    assert_eq!(var().reversed().render(), "reversed(self.var)");
}

#[test]
fn call_renders_every_positional_argument() {
    let args = Args::new().arg(1).arg("two").arg(3.0);
    assert_eq!(
        var().call(BuiltinFn::Round, args).render(),
        "round(self.var, 1, 'two', 3.0)"
    );
}

#[test]
fn call_renders_keywords_after_positionals() {
    let args = Args::new().kwarg("ndigits", 3).arg(None::<i32>);
    assert_eq!(
        var().call(BuiltinFn::Round, args).render(),
        "round(self.var, None, ndigits=3)"
    );
}

#[test]
fn call_keyword_only() {
    let args = Args::new().kwarg("key", "name").kwarg("strict", true);
    assert_eq!(
        var().call(BuiltinFn::Abs, args).render(),
        "abs(self.var, key='name', strict=True)"
    );
}

#[test]
fn repeated_keyword_replaces_previous_value() {
    let args = Args::new().kwarg("a", 1).kwarg("b", 2).kwarg("a", 3);
    assert_eq!(args.suffix(), ", a=3, b=2");
    assert_eq!(args.keyword().count(), 2);
}

#[test]
fn call_arguments_may_be_expressions() {
    let y = Expression::new("y");
    let args = Args::new().arg(&y + 1).kwarg("other", y.abs());
    assert_eq!(
        var().call(BuiltinFn::Reversed, args).render(),
        "reversed(self.var, y+(1), other=abs(y))"
    );
}

#[test]
fn empty_args_leave_no_separator() {
    let args = Args::new();
    assert!(args.is_empty());
    assert_eq!(args.suffix(), "");
    assert_eq!(var().call(BuiltinFn::Abs, args).render(), "abs(self.var)");
}

#[test]
fn builtins_wrap_compound_expressions() {
    let x = Expression::new("x");
    assert_eq!((&x - 1).abs().render(), "abs(x-(1))");
    assert_eq!((&x / 3).round_to(1).render(), "round(x/(3), 1)");
}

// Attribute and item access

#[test]
fn field_access() {
    assert_eq!(var().field("attribute").render(), "(self.var).attribute");
    assert_eq!(Expression::new("x").field("f").render(), "(x).f");
}

#[test]
fn field_access_records_names_of_own_methods() {
    let v = var();
    assert_eq!(v.field("render").render(), "(self.var).render");
    assert_eq!(v.field("identity_hash").render(), "(self.var).identity_hash");
    assert_eq!(v.field("field").render(), "(self.var).field");
}

#[test]
fn index_access() {
    let v = var();
    assert_eq!(v.index(1).render(), "(self.var)[1]");
    assert_eq!(v.index((1, 2)).render(), "(self.var)[(1, 2)]");
    assert_eq!(v.index("key").render(), "(self.var)['key']");
    assert_eq!(Expression::new("x").index((1, 2)).render(), "(x)[(1, 2)]");
    assert_eq!(Expression::new("x").index("key").render(), "(x)['key']");
}

#[test]
fn index_access_with_expression_key() {
    let i = Expression::new("i");
    assert_eq!(var().index(&i + 1).render(), "(self.var)[i+(1)]");
}

#[test]
fn chained_access() {
    let e = var().field("items").index(0).field("name");
    assert_eq!(e.render(), "(((self.var).items)[0]).name");
    assert_eq!((e + "!").render(), "(((self.var).items)[0]).name+('!')");
}
