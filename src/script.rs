//! Scripts and the built-in diagnostic.
//!
//! A [`Script`] is anything that can run against a [`Context`]: a closure,
//! or a type implementing the trait. [`Diagnostic`] is the built-in script
//! reporting the presence and values of the `TEST_PROP` server variable,
//! the `TEST` cookie and the `TEST` environment variable.
use std::io::Write;

use crate::context::Context;
use crate::error::Result;
use crate::value::Value;

/// A unit of work executed inside a [`Context`].
pub trait Script<W: Write> {
    fn run(&self, ctx: &mut Context<W>) -> Result<()>;
}

impl<W: Write, F> Script<W> for F
where
    F: Fn(&mut Context<W>) -> Result<()>,
{
    fn run(&self, ctx: &mut Context<W>) -> Result<()> {
        self(ctx)
    }
}

/// The built-in diagnostic script.
///
/// Output, in order:
///
/// 1. the byte length of the `TEST_PROP` server variable, its value, and
///    the suffix ` <- Server TEST_PROP`,
/// 2. whether the `TEST` cookie is set, and its value when it is,
/// 3. whether the `TEST` environment variable is set to a truthy value
///    (see [`Value::is_truthy`]), and its value when it is,
/// 4. the fixed line `Hello, world!`.
///
/// A missing `TEST_PROP` is reported as the empty string (length `0`) with
/// a warning logged.
pub struct Diagnostic;

impl<W: Write> Script<W> for Diagnostic {
    fn run(&self, ctx: &mut Context<W>) -> Result<()> {
        let prop = match ctx.server("TEST_PROP") {
            Some(value) => value.to_owned(),
            None => {
                warn!("server variable TEST_PROP is not registered, reporting empty value");
                String::new()
            }
        };
        ctx.echo(&prop.len().to_string())?;
        ctx.echo(&prop)?;
        ctx.echo(" <- Server TEST_PROP\n")?;

        match ctx.cookie("TEST") {
            Some(value) => {
                let value = value.to_owned();
                ctx.echo("Cookie 'TEST' is set!\n")?;
                ctx.echo("Value is: ")?;
                ctx.echo(&value)?;
            }
            None => {
                ctx.echo("Cookie 'TEST' is not set!\n")?;
            }
        }

        match ctx.getenv("TEST") {
            Some(value) if Value::from(value).is_truthy() => {
                let value = value.to_owned();
                ctx.echo("Environment variable 'TEST' is set!\n")?;
                ctx.echo("Value is: ")?;
                ctx.echo(&value)?;
                ctx.echo("\n")?;
            }
            _ => {
                ctx.echo("Environment variable 'TEST' is not set!\n")?;
            }
        }

        ctx.echo("Hello, world!\n")?;
        ctx.flush()
    }
}
