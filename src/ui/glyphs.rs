#[derive(Clone, Copy, Debug)]
pub struct Glyphs {
    pub arrow_left: &'static str,
    pub arrow_right: &'static str,
    pub chromosome_start: &'static str,
    pub chromosome_end: &'static str,
    pub h_separator: &'static str,
}

pub fn select(fancy_requested: bool) -> Glyphs {
    if fancy_requested {
        fancy()
    } else {
        ascii()
    }
}

fn ascii() -> Glyphs {
    Glyphs {
        arrow_left: "<",
        arrow_right: ">",
        chromosome_start: "[",
        chromosome_end: "]",
        h_separator: "-",
    }
}

fn fancy() -> Glyphs {
    Glyphs {
        arrow_left: "←",
        arrow_right: "→",
        chromosome_start: "┃",
        chromosome_end: "┃",
        h_separator: "─",
    }
}
