// Generic structs keep their bounds in the generated impls
use kinesim_macros::{ConfigDefaults, FieldFallbacks};

#[derive(ConfigDefaults, FieldFallbacks)]
struct Channel<T: Clone + Default> {
    #[default(T::default())]
    pub value: T,

    #[default(None)]
    #[fallback(3)]
    pub stride: Option<usize>,
}

fn main() {
    let channel: Channel<String> = Channel::default();
    assert_eq!(channel.value, "");
    assert_eq!(channel.stride_or_default(), 3);
    assert_eq!(Channel::<String>::DEFAULT_STRIDE, 3);
}
