//! Binding integration tests
//!
//! These tests drive binding through real clap parsing.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use kaa::{bind_fields, Bindable, Context, Field};

#[derive(Debug, Default, PartialEq)]
struct MyCmdPayload {
    username: String,
    id: u32,
    height: Option<i32>,
    env: String,
    string_slice: Vec<String>,
    boolean: bool,
}

impl Bindable for MyCmdPayload {
    fn fields(&mut self) -> Vec<Field<'_>> {
        bind_fields!(self {
            username => arg_tag("0"),
            id => arg_tag("1"),
            height => arg_tag("2,optional"),
            env => flag_tag("env"),
            string_slice => flag_tag("string_slice"),
            boolean => flag_tag("boolean"),
        })
    }
}

#[derive(Debug, Default, PartialEq)]
struct RequiredHeight {
    username: String,
    id: u32,
    height: Option<i32>,
}

impl Bindable for RequiredHeight {
    fn fields(&mut self) -> Vec<Field<'_>> {
        bind_fields!(self {
            username => arg_tag("0"),
            id => arg_tag("1"),
            height => arg_tag("2"),
        })
    }
}

fn base_cmd() -> Command {
    Command::new("test")
        .arg(Arg::new("env").long("env"))
        .arg(Arg::new("boolean").long("boolean").action(ArgAction::SetTrue))
        .arg(
            Arg::new("string_slice")
                .long("string_slice")
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(Arg::new("level").long("level").value_parser(value_parser!(i64)))
        .arg(Arg::new("ratio").long("ratio").value_parser(value_parser!(f64)))
        .arg(Arg::new("scale").long("scale").value_parser(value_parser!(f32)))
        .arg(
            Arg::new("ports")
                .long("ports")
                .value_delimiter(',')
                .value_parser(value_parser!(i64))
                .action(ArgAction::Append),
        )
}

fn flagged(cmd: &Command) -> ArgMatches {
    cmd.clone()
        .try_get_matches_from([
            "test",
            "--env",
            "dev",
            "--boolean",
            "--string_slice",
            "1,2,3",
        ])
        .unwrap()
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn expected(height: Option<i32>) -> MyCmdPayload {
    MyCmdPayload {
        username: "hello".to_string(),
        id: 2,
        height,
        env: "dev".to_string(),
        string_slice: vec!["1".to_string(), "2".to_string(), "3".to_string()],
        boolean: true,
    }
}

#[test]
fn test_new_context_from_data() {
    let cmd = base_cmd();
    let matches = flagged(&cmd);
    let mut ctx = Context::new(&cmd, &matches, args(&["hello", "2", "3"]));

    let mut p = MyCmdPayload::default();
    ctx.bind(&mut p).unwrap();
    assert_eq!(p, expected(Some(3)));
}

#[test]
fn test_new_context_from_data_with_optional() {
    let cmd = base_cmd();
    let matches = flagged(&cmd);
    let mut ctx = Context::new(&cmd, &matches, args(&["hello", "2"]));

    let mut p = MyCmdPayload::default();
    ctx.bind(&mut p).unwrap();
    assert_eq!(p, expected(None));
}

#[test]
fn test_required_arg_missing() {
    let cmd = base_cmd();
    let matches = flagged(&cmd);
    let mut ctx = Context::new(&cmd, &matches, args(&["hello", "2"]));

    let mut p = RequiredHeight::default();
    let err = ctx.bind(&mut p).unwrap_err();

    assert_eq!(err.to_string(), "not enough args, height is required");
    assert_eq!(p.username, "hello");
    assert_eq!(p.id, 2);
    assert_eq!(p.height, None);
    assert_eq!(ctx.error(), Some(&err));
}

#[derive(Debug, Default)]
struct Unregistered {
    value: String,
}

impl Bindable for Unregistered {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![Field::new("value", &mut self.value).flag_tag("nonexistent_flag")]
    }
}

#[test]
fn test_unregistered_flag_leaves_zero_value() {
    let cmd = base_cmd();
    let matches = flagged(&cmd);
    let mut ctx = Context::new(&cmd, &matches, Vec::new());

    let mut p = Unregistered::default();
    assert!(ctx.bind(&mut p).is_ok());
    assert_eq!(p.value, "");
}

#[derive(Debug, Default)]
struct Numeric {
    level: i64,
    ratio: f64,
    scale: f32,
    ports: Vec<i64>,
    wrong_kind: String,
    unsupported: u16,
    maybe_level: Option<i64>,
}

impl Bindable for Numeric {
    fn fields(&mut self) -> Vec<Field<'_>> {
        bind_fields!(self {
            level => flag("level"),
            ratio => flag("ratio"),
            scale => flag("scale"),
            ports => flag("ports"),
            wrong_kind => flag("level"),
            unsupported => flag("level"),
            maybe_level => flag("level"),
        })
    }
}

#[test]
fn test_numeric_and_sequence_flags() {
    let cmd = base_cmd();
    let matches = cmd
        .clone()
        .try_get_matches_from([
            "test", "--level", "5", "--ratio", "0.75", "--scale", "1.5", "--ports", "80,443",
        ])
        .unwrap();
    let mut ctx = Context::new(&cmd, &matches, Vec::new());

    let mut n = Numeric {
        wrong_kind: "keep".to_string(),
        unsupported: 7,
        ..Numeric::default()
    };
    ctx.bind(&mut n).unwrap();

    assert_eq!(n.level, 5);
    assert_eq!(n.ratio, 0.75);
    assert_eq!(n.scale, 1.5);
    assert_eq!(n.ports, vec![80, 443]);
    assert_eq!(n.maybe_level, Some(5));
    // string field against an integer flag
    assert_eq!(n.wrong_kind, "keep");
    // u16 has no flag accessor
    assert_eq!(n.unsupported, 7);
}

#[derive(Debug, Default)]
struct Both {
    name: String,
}

impl Bindable for Both {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![Field::new("name", &mut self.name)
            .flag_tag("env")
            .arg_tag("0")]
    }
}

#[test]
fn test_positional_wins_over_flag() {
    let cmd = base_cmd();
    let matches = flagged(&cmd);
    let mut ctx = Context::new(&cmd, &matches, args(&["from-arg"]));

    let mut b = Both::default();
    ctx.bind(&mut b).unwrap();
    assert_eq!(b.name, "from-arg");
}

#[test]
fn test_bind_twice_gives_same_result() {
    let cmd = base_cmd();
    let matches = flagged(&cmd);
    let mut ctx = Context::new(&cmd, &matches, args(&["hello", "2", "3"]));

    let mut first = MyCmdPayload::default();
    let mut second = MyCmdPayload::default();
    ctx.bind(&mut first).unwrap();
    ctx.bind(&mut second).unwrap();
    assert_eq!(first, second);
}
