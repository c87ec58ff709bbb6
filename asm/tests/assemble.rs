use hackasm::{assemble, Error};

fn words(source: &str) -> Vec<String> {
    assemble("test.asm", source)
        .expect("assembly failed")
        .iter()
        .map(|word| format!("{:016b}", word))
        .collect()
}

#[test]
fn add_program() {
    let output = words(include_str!("add.asm"));
    assert_eq!(
        output,
        vec![
            "0000000000000010", // @2
            "1110110000010000", // D=A
            "0000000000000011", // @3
            "1110000010010000", // D=D+A
            "0000000000000000", // @0
            "1110001100001000", // M=D
        ]
    );
}

#[test]
fn max_program() {
    let output = words(include_str!("max.asm"));
    assert_eq!(
        output,
        vec![
            "0000000000000000", // @R0
            "1111110000010000", // D=M
            "0000000000000001", // @R1
            "1111010011010000", // D=D-M
            "0000000000001010", // @ITSR0
            "1110001100000001", // D;JGT
            "0000000000000001", // @R1
            "1111110000010000", // D=M
            "0000000000001100", // @OUTPUT_D
            "1110101010000111", // 0;JMP
            "0000000000000000", // @R0
            "1111110000010000", // D=M
            "0000000000000010", // @R2
            "1110001100001000", // M=D
            "0000000000001110", // @END
            "1110101010000111", // 0;JMP
        ]
    );
}

#[test]
fn numeric_addresses_are_zero_padded() {
    assert_eq!(words("@2\n"), vec!["0000000000000010"]);
    assert_eq!(words("@32767\n"), vec!["0111111111111111"]);
}

#[test]
fn predefined_symbols() {
    let output = words("@R0\n@R15\n@SP\n@SCREEN\n@KBD\n");
    assert_eq!(
        output,
        vec![
            "0000000000000000",
            "0000000000001111",
            "0000000000000000",
            "0100000000000000",
            "0110000000000000",
        ]
    );
}

#[test]
fn variables_allocate_from_sixteen_in_reference_order() {
    let output = words("@second\n@first\n@second\n@third\n");
    assert_eq!(
        output,
        vec![
            "0000000000010000",
            "0000000000010001",
            "0000000000010000",
            "0000000000010010",
        ]
    );
}

#[test]
fn labels_resolve_to_the_next_instruction() {
    let output = words("(LOOP)\nD=M\n@LOOP\n0;JMP\n");
    assert_eq!(output.len(), 3);
    assert_eq!(output[1], "0000000000000000"); // @LOOP points at D=M
}

#[test]
fn label_wins_over_variable_allocation() {
    // END is referenced before any variable exists, yet resolves as a label
    let output = words("@i\n(END)\n@END\n0;JMP\n");
    assert_eq!(output[0], "0000000000010000"); // i -> 16
    assert_eq!(output[1], "0000000000000001"); // END -> 1, not 17
}

#[test]
fn permissive_label_names() {
    let output = words("@AB\n(A(B)\n0;JMP\n");
    assert_eq!(output[0], "0000000000000001"); // every paren is stripped
}

#[test]
fn comments_and_blank_lines_emit_nothing() {
    let source = "// header\n\n@1 // inline\n\nD=M // more\n\n";
    assert_eq!(words(source).len(), 2);
}

#[test]
fn assembly_is_idempotent() {
    let source = include_str!("max.asm");
    assert_eq!(words(source), words(source));
}

#[test]
fn every_word_is_sixteen_binary_digits() {
    for word in words(include_str!("max.asm")) {
        assert_eq!(word.len(), 16);
        assert!(word.bytes().all(|b| b == b'0' || b == b'1'));
    }
}

#[test]
fn unknown_mnemonics_fail_with_the_line() {
    let diag = assemble("test.asm", "@1\nD=D*A\n").unwrap_err();
    assert!(matches!(diag.err, Error::UnknownComp(_)));
    assert_eq!(diag.line.unwrap().no(), 2);

    assert!(matches!(
        assemble("test.asm", "XYZ=1\n").unwrap_err().err,
        Error::UnknownDest(_)
    ));
    assert!(matches!(
        assemble("test.asm", "D;NEVER\n").unwrap_err().err,
        Error::UnknownJump(_)
    ));
}

#[test]
fn address_past_fifteen_bits_fails() {
    assert!(matches!(
        assemble("test.asm", "@32768\n").unwrap_err().err,
        Error::AddressOutOfRange(_)
    ));
}
