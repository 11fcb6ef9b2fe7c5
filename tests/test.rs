use vnum::{
    dispatch, printer::print_to_string, Number, NumberKind, Recursive, Sequence, Visitor,
};

/// Records every case it receives and recurses through sequences.
#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<Number>,
    sequences: usize,
}

impl Visitor for Recorder {
    type Output = ();

    fn visit_integer(&mut self, value: i32) {
        self.calls.push(Number::Integer(value));
    }

    fn visit_single(&mut self, value: f32) {
        self.calls.push(Number::Single(value));
    }

    fn visit_double(&mut self, value: f64) {
        self.calls.push(Number::Double(value));
    }

    fn visit_sequence(&mut self, sequence: &Sequence) {
        self.sequences += 1;
        for element in sequence {
            dispatch(self, element);
        }
    }
}

/// A visitor with a non-unit output that never recurses.
struct KindOf;

impl Visitor for KindOf {
    type Output = NumberKind;

    fn visit_integer(&mut self, _: i32) -> NumberKind {
        NumberKind::Integer
    }

    fn visit_single(&mut self, _: f32) -> NumberKind {
        NumberKind::Single
    }

    fn visit_double(&mut self, _: f64) -> NumberKind {
        NumberKind::Double
    }

    fn visit_sequence(&mut self, _: &Sequence) -> NumberKind {
        NumberKind::Sequence
    }
}

#[test]
fn leaves_dispatch_once_with_their_payload() {
    let leaves = [
        Number::from(42),
        Number::from(i32::MIN),
        Number::from(1.25f32),
        Number::from(-0.5f64),
    ];

    for leaf in leaves {
        let mut recorder = Recorder::default();
        dispatch(&mut recorder, &leaf);
        assert_eq!(recorder.calls, [leaf.clone()]);
        assert_eq!(recorder.sequences, 0);
        assert_eq!(dispatch(&mut KindOf, &leaf), leaf.kind());
    }
}

#[test]
fn sample_sequence_prints_in_order() {
    let number = Number::sequence([
        Number::from(1),
        Number::from(2.0f64),
        Number::from(3.0f32),
    ]);
    let output = print_to_string(&number).unwrap();
    assert_eq!(output.lines().collect::<Vec<_>>(), ["1i", "2d", "3f"]);
}

#[test]
fn nested_sequences_recurse_through_every_level() {
    let number = Number::sequence([Number::sequence([Number::from(7.5f32)])]);
    let mut recorder = Recorder::default();
    dispatch(&mut recorder, &number);
    assert_eq!(recorder.calls, [Number::Single(7.5)]);
    assert_eq!(recorder.sequences, 2);
    assert_eq!(print_to_string(&number).unwrap(), "7.5f\n");
}

#[test]
fn empty_sequence_has_no_leaf_calls() {
    let number = Number::from(Sequence::new());
    let mut recorder = Recorder::default();
    dispatch(&mut recorder, &number);
    assert!(recorder.calls.is_empty());
    assert_eq!(recorder.sequences, 1);
    assert_eq!(print_to_string(&number).unwrap(), "");
}

#[test]
fn reassignment_is_visible_to_dispatch() {
    let mut number = Number::from(1);
    assert_eq!(dispatch(&mut KindOf, &number), NumberKind::Integer);

    number = Number::sequence([Number::from(2), Number::from(3)]);
    assert_eq!(dispatch(&mut KindOf, &number), NumberKind::Sequence);
    assert_eq!(print_to_string(&number).unwrap(), "2i\n3i\n");

    number = Number::from(4.0);
    assert_eq!(print_to_string(&number).unwrap(), "4d\n");
}

#[test]
fn copies_are_structurally_independent() {
    let original = Number::sequence([
        Number::from(1),
        Number::sequence([Number::from(2.0f32)]),
    ]);
    let mut copy = original.clone();
    assert_eq!(print_to_string(&copy).unwrap(), print_to_string(&original).unwrap());

    let inner = copy
        .as_sequence_mut()
        .and_then(|seq| seq.get_mut(1))
        .and_then(Number::as_sequence_mut)
        .unwrap();
    inner.push(3);
    *inner.get_mut(0).unwrap() = Number::from(9);

    assert_eq!(print_to_string(&original).unwrap(), "1i\n2f\n");
    assert_eq!(print_to_string(&copy).unwrap(), "1i\n9i\n3i\n");
}

#[test]
fn wrapped_elements_dispatch_like_their_contents() {
    let sequence = Sequence::from([Number::from(1), Number::from(2.0)]);
    let kinds = sequence
        .elements()
        .iter()
        .map(|element: &Recursive<Number>| dispatch(&mut KindOf, element))
        .collect::<Vec<_>>();
    assert_eq!(kinds, [NumberKind::Integer, NumberKind::Double]);
}

#[test]
fn json_keeps_kinds() -> color_eyre::Result<()> {
    let number: Number = "[1i, [2f], 3d]".parse()?;
    let json = serde_json::to_string(&number)?;
    assert_eq!(
        json,
        r#"{"Sequence":[{"Integer":1},{"Sequence":[{"Single":2.0}]},{"Double":3.0}]}"#
    );

    let back: Number = serde_json::from_str(&json)?;
    assert_eq!(back, number);
    Ok(())
}
