//! A reader for gene reference and island files.

use std::io::BufRead;
use std::io::{self};
use std::iter;
use std::str::FromStr;

use crate::Line;

/// The new line character.
const NEW_LINE: char = '\n';

/// The carriage return character.
const CARRIAGE_RETURN: char = '\r';

/// An error related to a [`Reader`].
#[derive(Debug)]
pub enum Error<E> {
    /// An I/O error.
    Io(io::Error),

    /// An invalid record, along with the line number and the offending line.
    InvalidRecord(E, usize, String),
}

impl<E> std::fmt::Display for Error<E>
where
    E: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::InvalidRecord(err, line_no, line) => {
                write!(f, "invalid record at line {line_no}: {err}\n\nline: {line}")
            }
        }
    }
}

impl<E> std::error::Error for Error<E> where E: std::error::Error {}

/// A reader for line-oriented gene reference and island files.
#[derive(Clone, Debug)]
pub struct Reader<T>
where
    T: BufRead,
{
    /// The inner reader.
    inner: T,

    /// The number of lines read so far.
    line_no: usize,
}

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates a reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"1\t30001\t32000\n1\t52001\t54000\n";
    /// let reader = islandgenes::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::from(inner)
    }

    /// Gets a reference to the inner reader.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Gets a mutable reference to the inner reader.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consumes self and returns the inner reader.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Gets the number of the last line read (counting from one).
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"1\t30001\t32000\n\n1\t52001\t54000\n";
    /// let mut reader = islandgenes::Reader::new(&data[..]);
    /// assert_eq!(reader.line_no(), 0);
    ///
    /// let mut buffer = String::new();
    /// while reader.read_line_raw(&mut buffer)? > 0 {}
    /// assert_eq!(reader.line_no(), 3);
    ///
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Reads a raw, textual line from the underlying reader.
    ///
    /// The trailing line ending is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"1\t30001\t32000\r\n1\t52001\t54000";
    /// let mut reader = islandgenes::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 15);
    /// assert_eq!(buffer, "1\t30001\t32000");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 13);
    /// assert_eq!(buffer, "1\t52001\t54000");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 0);
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line_raw(&mut self, buffer: &mut String) -> io::Result<usize> {
        let read = read_line(&mut self.inner, buffer)?;

        if read > 0 {
            self.line_no += 1;
        }

        Ok(read)
    }

    /// Attempts to read a [`Line`] from the underlying reader.
    ///
    /// The raw text of the line is left in `buffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use islandgenes::record::IslandRecord;
    /// use islandgenes::Line;
    ///
    /// let data = b"1\t30001\t32000\n\n";
    /// let mut reader = islandgenes::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    /// assert!(matches!(
    ///     reader.read_line::<IslandRecord>(&mut buffer)?,
    ///     Some(Line::Record(_))
    /// ));
    /// assert_eq!(buffer, "1\t30001\t32000");
    /// assert!(matches!(
    ///     reader.read_line::<IslandRecord>(&mut buffer)?,
    ///     Some(Line::Empty)
    /// ));
    /// assert!(reader.read_line::<IslandRecord>(&mut buffer)?.is_none());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn read_line<R>(&mut self, buffer: &mut String) -> Result<Option<Line<R>>, Error<R::Err>>
    where
        R: FromStr,
    {
        let read = self.read_line_raw(buffer).map_err(Error::Io)?;

        match read {
            0 => Ok(None),
            _ => {
                let line = buffer
                    .parse::<Line<R>>()
                    .map_err(|e| Error::InvalidRecord(e, self.line_no, buffer.clone()))?;
                Ok(Some(line))
            }
        }
    }

    /// Returns an iterator over the records in the underlying reader,
    /// skipping blank lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use islandgenes::record::GeneRecord;
    ///
    /// let data = b"1\tAT1G01010\t3631\t5899\n\n1\tAT1G01020\t6788\t9130\n";
    /// let mut reader = islandgenes::Reader::new(&data[..]);
    ///
    /// let genes = reader
    ///     .records::<GeneRecord>()
    ///     .collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(genes.len(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn records<'a, R>(&'a mut self) -> impl Iterator<Item = Result<R, Error<R::Err>>> + 'a
    where
        R: FromStr + 'a,
    {
        let mut buffer = String::new();

        iter::from_fn(move || loop {
            match self.read_line::<R>(&mut buffer) {
                Ok(None) => return None,
                Ok(Some(Line::Empty)) => continue,
                Ok(Some(Line::Record(record))) => return Some(Ok(record)),
                Err(err) => return Some(Err(err)),
            }
        })
    }
}

impl<T> From<T> for Reader<T>
where
    T: BufRead,
{
    fn from(inner: T) -> Self {
        Self { inner, line_no: 0 }
    }
}

/// Reads a line from a buffered reader, removing the line ending.
fn read_line<T>(reader: &mut T, buffer: &mut String) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_line(buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.ends_with(NEW_LINE) {
                buffer.pop();

                if buffer.ends_with(CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}
