/// Counts lines the way a universal-newline text reader splits them.
///
/// `\n`, `\r\n` and a lone `\r` each end a line, and trailing bytes after the
/// last terminator form one more line. Empty input has no lines.
pub fn count_text_lines(bytes: &[u8]) -> usize {
    let Some(&last) = bytes.last() else {
        return 0;
    };
    let newline_count = bytecount::count(bytes, b'\n');
    let lone_cr_count = memchr::memchr_iter(b'\r', bytes).filter(|&i| bytes.get(i + 1) != Some(&b'\n')).count();
    let unterminated = usize::from(last != b'\n' && last != b'\r');
    newline_count + lone_cr_count + unterminated
}
