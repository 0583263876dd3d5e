use crate::DisplayModes;

const TAB: u8 = 0x09;
const LINE_FEED: u8 = 0x0a;
const DELETE: u8 = 0x7f;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Rewrite `input` with non-printing bytes rendered visibly according to
/// `modes`.
///
/// Bytes are processed left to right; the result may be longer than the
/// input and is always a fresh buffer. The mapping is total over all byte
/// values, and with every mode off it is the identity.
pub fn transcode(input: &[u8], modes: DisplayModes) -> Vec<u8> {
    if modes.is_plain() {
        return input.to_vec();
    }

    let mut output = Vec::with_capacity(input.len());
    for &byte in input {
        push_visible(&mut output, byte, modes);
    }
    output
}

fn push_visible(output: &mut Vec<u8>, byte: u8, modes: DisplayModes) {
    if byte >= 0x80 && modes.nonprinting {
        if modes.hex {
            push_hex(output, byte);
        } else {
            // Meta marker, then the representation of the low seven bits.
            output.extend_from_slice(b"M-");
            push_visible(output, byte & 0x7f, modes);
        }
        return;
    }

    match byte {
        TAB => {
            if !modes.tabs {
                output.push(byte);
            } else if modes.hex {
                push_hex(output, byte);
            } else {
                output.extend_from_slice(b"^I");
            }
        }
        LINE_FEED => {
            // The line feed itself always passes through unescaped.
            if modes.end_of_line {
                output.push(b'$');
            }
            output.push(byte);
        }
        0x00..=0x1f if modes.nonprinting => {
            if modes.hex {
                push_hex(output, byte);
            } else {
                output.push(b'^');
                output.push(byte + 0x40);
            }
        }
        DELETE if modes.nonprinting => {
            if modes.hex {
                push_hex(output, byte);
            } else {
                output.extend_from_slice(b"^?");
            }
        }
        _ => output.push(byte),
    }
}

fn push_hex(output: &mut Vec<u8>, byte: u8) {
    output.push(b'<');
    output.push(HEX_DIGITS[usize::from(byte >> 4)]);
    output.push(HEX_DIGITS[usize::from(byte & 0x0f)]);
    output.push(b'>');
}
