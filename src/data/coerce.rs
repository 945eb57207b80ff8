use super::model::Cell;

/// Coerce a cell of unknown representation to a number.
///
/// The cell is rendered as text, every character other than an ASCII digit,
/// `.` or `-` is removed, and what remains is parsed. Empty results and the
/// lone sentinels `-` and `.` are treated as absent, as is anything that still
/// fails to parse (`1.2.3`, `5-`).
pub fn coerce_numeric(cell: &Cell) -> Option<f64> {
    let cleaned: String = cell
        .to_string()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if cleaned.is_empty() || cleaned == "-" || cleaned == "." {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce every field of a record; `None` unless all of them succeed.
pub fn coerce_all<const N: usize>(cells: [&Cell; N]) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    for (slot, cell) in out.iter_mut().zip(cells) {
        *slot = coerce_numeric(cell)?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::from(s)
    }

    #[test]
    fn strips_trailing_garbage() {
        assert_eq!(coerce_numeric(&text("12.3abc")), Some(12.3));
        assert_eq!(coerce_numeric(&text("  18.25 °C")), Some(18.25));
    }

    #[test]
    fn keeps_sign() {
        assert_eq!(coerce_numeric(&text("-5.2")), Some(-5.2));
    }

    #[test]
    fn sentinels_are_absent() {
        assert_eq!(coerce_numeric(&text("--")), None);
        assert_eq!(coerce_numeric(&text("-")), None);
        assert_eq!(coerce_numeric(&text(".")), None);
        assert_eq!(coerce_numeric(&text("")), None);
        assert_eq!(coerce_numeric(&text("n/a")), None);
        assert_eq!(coerce_numeric(&Cell::Empty), None);
        assert_eq!(coerce_numeric(&Cell::Bool(true)), None);
    }

    #[test]
    fn unparseable_remainder_is_absent() {
        assert_eq!(coerce_numeric(&text("1.2.3")), None);
        assert_eq!(coerce_numeric(&text("5-")), None);
    }

    #[test]
    fn non_finite_numbers_are_absent() {
        assert_eq!(coerce_numeric(&Cell::Number(f64::NAN)), None);
        assert_eq!(coerce_numeric(&Cell::Number(f64::INFINITY)), None);
    }

    #[test]
    fn idempotent_on_clean_values() {
        for v in [0.0, 1.5, -273.15, 2500.0, 0.001] {
            let once = coerce_numeric(&Cell::Number(v)).unwrap();
            assert_eq!(once, v);
            let twice = coerce_numeric(&text(&once.to_string())).unwrap();
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn coerce_all_requires_every_field() {
        let depth = text("10");
        let temp = text("5.0");
        let bad = text("--");
        assert_eq!(coerce_all([&depth, &temp]), Some([10.0, 5.0]));
        assert_eq!(coerce_all([&depth, &bad]), None);
        assert_eq!(coerce_all([&bad, &temp]), None);
    }
}
