/// One console line: `name  mean +/- stdd |   ---(mean)---   |`, the bar
/// scaled so that `min_val..max_val` spans `char_max` characters.
pub fn spread_line(
    name: &str,
    mean: f64,
    stdd: f64,
    char_max: i32,
    min_val: f64,
    max_val: f64,
) -> String {
    let mut out = std::format!(
        "{:>20} {:>6} +/- {:<6} |",
        name,
        std::format!("{:2.2}", mean),
        std::format!("{:2.2}", stdd)
    );
    let spread = max_val - min_val;
    //a single season or identical seasons; put everything at the left edge
    let scale = |v: f64| {
        if spread > 0.0 {
            (((v - min_val) / spread) * char_max as f64)
                .max(0.0)
                .min(char_max as f64) as i32
        } else {
            0
        }
    };
    let chars_left = scale(mean - stdd);
    let chars_mid = scale(mean);
    let chars_right = scale(mean + stdd);
    out.push('|');
    for _ in 0..chars_left {
        out.push(' ');
    }
    for _ in chars_left..chars_mid {
        out.push('-');
    }
    out.push_str(&std::format!("({:2.2})", mean));
    for _ in chars_mid..chars_right {
        out.push('-');
    }
    for _ in chars_right..char_max {
        out.push(' ');
    }
    out.push('|');
    out
}

pub fn print_spread(name: &str, mean: f64, stdd: f64, char_max: i32, min_val: f64, max_val: f64) {
    eprintln!("{}", spread_line(name, mean, stdd, char_max, min_val, max_val));
}
