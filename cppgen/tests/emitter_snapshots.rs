//! Snapshot tests for complete generated programs.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use cppgen::{BlockStyle, Emitter, Indent};

#[test]
fn test_hello_world() {
    let mut emitter = Emitter::default();
    emitter.include("iostream");
    emitter.with_block("int main()", |e| {
        let output_text = "Hello World";
        e.write_code(&format!("std::cout << \"{output_text}\"<< std::endl"));
        e.write_code("return 0");
    });

    insta::assert_snapshot!(emitter.value().unwrap(), @r#"
    #include <iostream>
    int main() {
        std::cout << "Hello World"<< std::endl;
        return 0;
    }
    "#);
}

#[test]
fn test_switch_with_fallthrough_cases() {
    let mut emitter = Emitter::default();
    emitter.include("stdio.h").blank_line();
    emitter.comment("Maps a color to its RGB value.");
    emitter.with_block("int rgb(enum color c)", |e| {
        e.with_block("switch (c)", |e| {
            drop(e.case(&["RED"], "return 0xff0000"));
            e.with_case(&["GREEN", "LIME"], "break", |e| {
                e.write_code("log_green(c)");
            });
            e.with_label("default", "break", |e| {
                e.write_code("abort()");
            });
        });
        e.write_code("return 0x00ff00");
    });

    insta::assert_snapshot!(emitter.value().unwrap(), @r"
    #include <stdio.h>

    // Maps a color to its RGB value.
    int rgb(enum color c) {
        switch (c) {
            case RED:
                return 0xff0000;
            case GREEN:
            case LIME:
                log_green(c);
                break;
            default:
                abort();
                break;
        }
        return 0x00ff00;
    }
    ");
}

// Trailing whitespace after `} else {` is part of the expected output, so
// this one is compared byte for byte.
#[test]
fn test_mixed_block_styles_two_space_indent() {
    let mut emitter = Emitter::new(Indent::GNU);
    emitter.with_block_style("typedef struct", BlockStyle::BLOCK.without_newline(), |e| {
        e.write_code("int x; int y");
    });
    emitter.write_code("point");
    emitter.with_block_style(
        "static const int table[]",
        BlockStyle::INLINE.without_newline(),
        |e| {
            e.write("1, 2,\n3");
        },
    );
    emitter.write_line(";");
    emitter.with_block("int f(int n)", |e| {
        e.with_block_style("if (n < 0)", BlockStyle::BLOCK.without_newline(), |e| {
            e.write_code("return -1");
        });
        e.with_block("else", |e| {
            e.write_code("return g(\nn,\nn + 1)");
        });
    });

    assert_eq!(
        emitter.into_value().unwrap(),
        "typedef struct {\n  int x;\n  int y;\n} point;\n\
         static const int table[] { 1, 2, 3 } ;\n\
         int f(int n) {\n  if (n < 0) {\n    return -1;\n  } else {  \n    \
         return g(\n      n,\n      n + 1);\n  }\n}\n"
    );
}

#[test]
fn test_guard_api_matches_closure_api() {
    let mut with_guards = Emitter::default();
    {
        let mut func = with_guards.block("void tick(void)");
        let mut retry = func.label_with_end("again", "goto again");
        retry.write_code("step()");
    }

    let mut with_closures = Emitter::default();
    with_closures.with_block("void tick(void)", |e| {
        e.with_label("again", "goto again", |e| {
            e.write_code("step()");
        });
    });

    assert_eq!(with_guards.value().unwrap(), with_closures.value().unwrap());
    insta::assert_snapshot!(with_guards.value().unwrap(), @r"
    void tick(void) {
        again:
            step();
            goto again;
    }
    ");
}
