use livestock_macros::Series;

#[derive(Debug, Clone, Copy, Series)]
#[series(name = "AdoptionCurve")]
pub struct AdoptionPoint {
    pub year: f64,
    pub adoption: f64,
}

fn main() {
    let mut curve = AdoptionCurve::with_capacity(10);
    assert!(curve.is_empty());
    curve.push(&AdoptionPoint { year: 1.0, adoption: 0.26 });
    assert_eq!(curve.len(), 1);
    assert_eq!(AdoptionPoint::field_names(), &["year", "adoption"]);
}
