//! Built-in leader catalog.
//!
//! Order matters: it is the order shown in selection controls.

/// `(name, avatar prompt)` pairs for every built-in leader.
pub const CATALOG: [(&str, &str); 11] = [
    ("Marie Curie", MARIE_CURIE_AVATAR),
    ("Rosa Parks", ROSA_PARKS_AVATAR),
    ("Amelia Earhart", AMELIA_EARHART_AVATAR),
    ("Frida Kahlo", FRIDA_KAHLO_AVATAR),
    ("Jane Austen", JANE_AUSTEN_AVATAR),
    ("Malala Yousafzai", MALALA_YOUSAFZAI_AVATAR),
    ("Ada Lovelace", ADA_LOVELACE_AVATAR),
    ("Susan B. Anthony", SUSAN_B_ANTHONY_AVATAR),
    ("Hatshepsut", HATSHEPSUT_AVATAR),
    ("Eleanor Roosevelt", ELEANOR_ROOSEVELT_AVATAR),
    ("Michelle Obama", MICHELLE_OBAMA_AVATAR),
];

// Avatar prompts for the image model

const MARIE_CURIE_AVATAR: &str =
    "Full-body portrait of Marie Curie, realistic style, wearing early 1900s scientific attire";

const ROSA_PARKS_AVATAR: &str =
    "Full-body portrait of Rosa Parks, civil rights era clothing, realistic style";

const AMELIA_EARHART_AVATAR: &str =
    "Full-body portrait of Amelia Earhart, 1930s aviator outfit, realistic style";

const FRIDA_KAHLO_AVATAR: &str =
    "Full-body portrait of Frida Kahlo, colorful artistic attire, realistic style";

const JANE_AUSTEN_AVATAR: &str =
    "Full-body portrait of Jane Austen, early 19th century dress, realistic style";

const MALALA_YOUSAFZAI_AVATAR: &str =
    "Full-body portrait of Malala Yousafzai, modern clothing, realistic style";

const ADA_LOVELACE_AVATAR: &str =
    "Full-body portrait of Ada Lovelace, Victorian-era attire, realistic style";

const SUSAN_B_ANTHONY_AVATAR: &str =
    "Full-body portrait of Susan B. Anthony, 19th century dress, realistic style";

const HATSHEPSUT_AVATAR: &str =
    "Full-body portrait of Hatshepsut, ancient Egyptian royal attire, realistic style";

const ELEANOR_ROOSEVELT_AVATAR: &str =
    "Full-body portrait of Eleanor Roosevelt, 1940s formal attire, realistic style";

const MICHELLE_OBAMA_AVATAR: &str =
    "Full-body portrait of Michelle Obama, modern formal attire, realistic style";
