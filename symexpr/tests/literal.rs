use symexpr::literal::Literal;

fn lit(value: impl Into<Literal>) -> String {
    value.into().to_string()
}

#[test]
fn scalars() {
    assert_eq!(lit(Literal::None), "None");
    assert_eq!(lit(true), "True");
    assert_eq!(lit(false), "False");
    assert_eq!(lit(0), "0");
    assert_eq!(lit(-42i64), "-42");
    assert_eq!(lit(u64::MAX), "18446744073709551615");
    assert_eq!(lit(i128::MIN), "-170141183460469231731687303715884105728");
}

#[test]
fn floats_positional_range() {
    assert_eq!(lit(2.0), "2.0");
    assert_eq!(lit(-0.0), "-0.0");
    assert_eq!(lit(0.0), "0.0");
    assert_eq!(lit(0.1), "0.1");
    assert_eq!(lit(1.5), "1.5");
    assert_eq!(lit(0.0001), "0.0001");
    assert_eq!(lit(123456.789), "123456.789");
    assert_eq!(lit(1e15), "1000000000000000.0");
    assert_eq!(lit(0.5f32), "0.5");
}

#[test]
fn f32_renders_its_widened_value() {
    assert_eq!(lit(0.1f32), lit(f64::from(0.1f32)));
    assert_eq!(lit(0.1f32), "0.10000000149011612");
}

#[test]
fn floats_scientific_range() {
    assert_eq!(lit(1e16), "1e+16");
    assert_eq!(lit(1.5e-5), "1.5e-05");
    assert_eq!(lit(0.00001), "1e-05");
    assert_eq!(lit(-2.5e100), "-2.5e+100");
    assert_eq!(lit(1e-300), "1e-300");
}

#[test]
fn floats_non_finite() {
    assert_eq!(lit(f64::INFINITY), "inf");
    assert_eq!(lit(f64::NEG_INFINITY), "-inf");
    assert_eq!(lit(f64::NAN), "nan");
}

#[test]
fn strings_pick_quotes() {
    assert_eq!(lit("key"), "'key'");
    assert_eq!(lit(""), "''");
    assert_eq!(lit("it's"), "\"it's\"");
    assert_eq!(lit("say \"hi\""), "'say \"hi\"'");
    assert_eq!(lit("both ' and \""), "'both \\' and \"'");
    assert_eq!(lit('c'), "'c'");
    assert_eq!(lit(String::from("owned")), "'owned'");
}

#[test]
fn strings_escape_special_characters() {
    assert_eq!(lit("a\\b"), "'a\\\\b'");
    assert_eq!(lit("line\nbreak"), "'line\\nbreak'");
    assert_eq!(lit("tab\there"), "'tab\\there'");
    assert_eq!(lit("cr\r"), "'cr\\r'");
    assert_eq!(lit("\u{0}"), "'\\x00'");
    assert_eq!(lit("\u{7f}"), "'\\x7f'");
    assert_eq!(lit("\u{a0}"), "'\\xa0'");
    assert_eq!(lit("\u{2028}"), "'\\u2028'");
    assert_eq!(lit("\u{3000}"), "'\\u3000'");
}

#[test]
fn strings_escape_invisible_code_points() {
    // Format, private-use and unassigned characters.
    assert_eq!(lit("\u{200b}"), "'\\u200b'");
    assert_eq!(lit("\u{ad}"), "'\\xad'");
    assert_eq!(lit("\u{feff}"), "'\\ufeff'");
    assert_eq!(lit("\u{e000}"), "'\\ue000'");
    assert_eq!(lit("\u{378}"), "'\\u0378'");
    assert_eq!(lit("\u{10ffff}"), "'\\U0010ffff'");
    assert_eq!(lit("a\u{200d}b"), "'a\\u200db'");
}

#[test]
fn strings_keep_printable_unicode() {
    assert_eq!(lit("héllo wörld"), "'héllo wörld'");
    assert_eq!(lit("日本"), "'日本'");
}

#[test]
fn tuples() {
    assert_eq!(lit(()), "()");
    assert_eq!(lit((1,)), "(1,)");
    assert_eq!(lit((1, 2)), "(1, 2)");
    assert_eq!(lit((1, "a", 2.5, true)), "(1, 'a', 2.5, True)");
    assert_eq!(lit(((1, 2), (3,))), "((1, 2), (3,))");
    assert_eq!(lit(Literal::tuple([7, 8, 9])), "(7, 8, 9)");
}

#[test]
fn lists_and_maps() {
    assert_eq!(lit(vec![1, 2, 3]), "[1, 2, 3]");
    assert_eq!(lit(Vec::<i32>::new()), "[]");
    assert_eq!(lit(&["a", "b"][..]), "['a', 'b']");
    assert_eq!(lit(Literal::map([("b", 1), ("a", 2)])), "{'b': 1, 'a': 2}");
    assert_eq!(lit(Literal::map(Vec::<(i32, i32)>::new())), "{}");
}

#[test]
fn options() {
    assert_eq!(lit(Some(3)), "3");
    assert_eq!(lit(None::<&str>), "None");
    assert_eq!(lit(vec![Some(1), None]), "[1, None]");
}
