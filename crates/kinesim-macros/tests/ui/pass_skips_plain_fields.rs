// Fields without #[fallback] get no accessor and need not be optional
use kinesim_macros::FieldFallbacks;

#[derive(FieldFallbacks)]
struct Incline {
    pub label: String,
    pub friction: Option<f64>,

    #[fallback(30.0)]
    pub angle: Option<f64>,
}

fn main() {
    let incline = Incline {
        label: "block".to_string(),
        friction: None,
        angle: None,
    };
    assert_eq!(incline.angle_or_default(), 30.0);
    assert!(incline.friction.is_none());
    assert_eq!(incline.label, "block");
}
