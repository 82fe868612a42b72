// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::Write as FmtWrite;

use indoc::writedoc;

use crate::table::JoiningTable;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum Language {
    #[default]
    C,
    Rust,
}

pub struct Output<'a> {
    pub arg_lang: Language,
    pub arg_min_occupancy: Option<u32>,
    /// File name of the input, without its directory.
    pub arg_input: String,

    pub table: JoiningTable<'a>,
}

impl Output<'_> {
    fn args(&self) -> String {
        let mut buf = String::new();
        if self.arg_lang == Language::Rust {
            buf.push_str("--lang=rust ");
        }
        if let Some(pct) = self.arg_min_occupancy {
            _ = write!(buf, "--min-occupancy={pct} ");
        }
        buf.push_str(&self.arg_input);
        buf
    }
}

pub fn generate(out: &Output) -> String {
    match out.arg_lang {
        Language::C => generate_c(out),
        Language::Rust => generate_rust(out),
    }
}

pub fn generate_c(out: &Output) -> String {
    let mut buf = String::new();

    _ = writedoc!(
        buf,
        "
        /* == Start of generated table == */
        /*
         * The following table is generated by running:
         *
         *   joining-table-gen {}
         *
         * on files with these headers:
         *
        ",
        out.args(),
    );
    for line in out.table.header() {
        _ = writeln!(buf, " * {line}");
    }
    buf.push_str(" */\n");

    buf.push_str("static const uint8_t joining_table[] =\n{\n");
    for entry in out.table.entries() {
        if let Some(block) = entry.block {
            _ = writeln!(buf, "\n  /* {block} */\n");
        }
        _ = writeln!(buf, "  {}, /* {} */", entry.class, entry.annotation);
    }

    _ = writedoc!(
        buf,
        "

        }};

        #define JOINING_TABLE_FIRST\t0x{:04X}
        #define JOINING_TABLE_LAST\t0x{:04X}

        /* == End of generated table == */
        ",
        out.table.first(),
        out.table.last(),
    );
    buf
}

pub fn generate_rust(out: &Output) -> String {
    let mut buf = String::new();

    _ = writedoc!(
        buf,
        "
        // == Start of generated table ==
        //
        // The following table is generated by running:
        //
        //   joining-table-gen {}
        //
        // on files with these headers:
        //
        ",
        out.args(),
    );
    for line in out.table.header() {
        _ = writeln!(buf, "// {line}");
    }

    _ = writeln!(buf, "\n#[rustfmt::skip]\npub const JOINING_TABLE: [u8; {}] = [", out.table.len());
    for entry in out.table.entries() {
        if let Some(block) = entry.block {
            _ = writeln!(buf, "\n    // {block}\n");
        }
        _ = writeln!(buf, "    {}, // {}", entry.class, entry.annotation);
    }

    _ = writedoc!(
        buf,
        "
        ];

        pub const JOINING_TABLE_FIRST: u32 = 0x{:04X};
        pub const JOINING_TABLE_LAST: u32 = 0x{:04X};

        // == End of generated table ==
        ",
        out.table.first(),
        out.table.last(),
    );
    buf
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::table::{DEFAULT_MIN_OCCUPANCY, build_table};

    const INPUT: &str = indoc! {"
        # ArabicShaping-6.1.0.txt
        # Date: 2011-04-15, 23:16:00 GMT [KW]
        #
        ####################
        # Arabic characters

        0620; ARABIC LETTER KASHMIRI YEH; D; YEH
        0621; ARABIC LETTER HAMZA; U; No_Joining_Group
        0623; ARABIC LETTER ALEF WITH HAMZA ABOVE; R; ALEF
        # Syriac characters
        0710; SYRIAC LETTER ALAPH; R; ALAPH
    "};

    fn output(input: &str, arg_lang: Language) -> Output<'_> {
        let table = build_table(input, 1).unwrap();
        Output { arg_lang, arg_min_occupancy: Some(1), arg_input: "ArabicShaping.txt".into(), table }
    }

    #[test]
    fn test_generate_c() {
        let out = output(INPUT, Language::C);
        let text = generate_c(&out);

        assert!(text.starts_with(indoc! {"
            /* == Start of generated table == */
            /*
             * The following table is generated by running:
             *
             *   joining-table-gen --min-occupancy=1 ArabicShaping.txt
             *
             * on files with these headers:
             *
             * # ArabicShaping-6.1.0.txt
             * # Date: 2011-04-15, 23:16:00 GMT [KW]
             */
            static const uint8_t joining_table[] =
            {

              /* Arabic characters */

              JOINING_TYPE_D, /* 0620; ARABIC LETTER KASHMIRI YEH; D; YEH */
              JOINING_TYPE_U, /* 0621; ARABIC LETTER HAMZA; U; No_Joining_Group */
              JOINING_TYPE_X, /* 0622 */
              JOINING_TYPE_R, /* 0623; ARABIC LETTER ALEF WITH HAMZA ABOVE; R; ALEF */

              /* Syriac characters */

              JOINING_TYPE_X, /* 0624 */
        "}));
        assert!(text.contains("  JOINING_TYPE_X, /* 070F */\n"));
        assert!(text.ends_with(indoc! {"
              JOINING_GROUP_ALAPH, /* 0710; SYRIAC LETTER ALAPH; R; ALAPH */

            };

            #define JOINING_TABLE_FIRST\t0x0620
            #define JOINING_TABLE_LAST\t0x0710

            /* == End of generated table == */
        "}));

        let rows = text.lines().filter(|l| l.starts_with("  JOINING_")).count();
        assert_eq!(rows, 0x0710 - 0x0620 + 1);
    }

    #[test]
    fn test_generate_rust() {
        let out = output(INPUT, Language::Rust);
        let text = generate(&out);

        assert!(text.starts_with(indoc! {"
            // == Start of generated table ==
            //
            // The following table is generated by running:
            //
            //   joining-table-gen --lang=rust --min-occupancy=1 ArabicShaping.txt
            //
            // on files with these headers:
            //
            // # ArabicShaping-6.1.0.txt
            // # Date: 2011-04-15, 23:16:00 GMT [KW]

            #[rustfmt::skip]
            pub const JOINING_TABLE: [u8; 241] = [

                // Arabic characters

                JOINING_TYPE_D, // 0620; ARABIC LETTER KASHMIRI YEH; D; YEH
        "}));
        assert!(text.ends_with(indoc! {"
                JOINING_GROUP_ALAPH, // 0710; SYRIAC LETTER ALAPH; R; ALAPH
            ];

            pub const JOINING_TABLE_FIRST: u32 = 0x0620;
            pub const JOINING_TABLE_LAST: u32 = 0x0710;

            // == End of generated table ==
        "}));
    }

    #[test]
    fn test_round_trip() {
        let input = "H1\nH2\n####################\n0621;...;U;\n0622;...;D;\n";
        let table = build_table(input, DEFAULT_MIN_OCCUPANCY).unwrap();
        let out = Output {
            arg_lang: Language::C,
            arg_min_occupancy: None,
            arg_input: "ArabicShaping.txt".into(),
            table,
        };
        let text = generate(&out);

        assert!(text.contains(" *   joining-table-gen ArabicShaping.txt\n"));
        assert!(text.contains(" * H1\n * H2\n */\n"));
        assert!(text.contains("{\n  JOINING_TYPE_U, /* 0621; ...; U;  */\n  JOINING_TYPE_D, /* 0622; ...; D;  */\n\n};\n"));
        assert!(text.contains("#define JOINING_TABLE_FIRST\t0x0621\n"));
        assert!(text.contains("#define JOINING_TABLE_LAST\t0x0622\n"));
    }
}
