use std::io::{self, BufRead, Write};
use xkcd_core::DocId;

/// Page through `results`, `page_size` at a time, asking on `input` before each further page.
/// `reference` renders a document ID for humans.
pub fn show_results<R, W, F>(results: &[DocId], page_size: usize, reference: F, mut input: R, mut out: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn(DocId) -> String,
{
    if results.is_empty() {
        writeln!(out, "search no match, bye")?;
        return Ok(());
    }
    let page_size = page_size.max(1);

    writeln!(out, "Search Result:")?;
    for (page_no, page) in results.chunks(page_size).enumerate() {
        let offset = page_no * page_size;
        for (i, id) in page.iter().enumerate() {
            writeln!(out, "{}: {}", offset + i + 1, reference(*id))?;
        }
        if offset + page.len() == results.len() {
            break;
        }

        writeln!(out, "see next page results? (y/n)")?;
        out.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        match answer.trim() {
            "y" => continue,
            "n" => {
                writeln!(out, "bye~")?;
                return Ok(());
            }
            _ => {
                writeln!(out, "wrong param, bye~")?;
                return Ok(());
            }
        }
    }
    writeln!(out, "print finished, bye~")?;
    Ok(())
}
