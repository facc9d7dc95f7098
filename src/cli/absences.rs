//! Absence report: fetch, format, deliver

use chrono::NaiveDate;
use log::debug;

use crate::client::AbsenceApi;
use crate::error::Result;
use crate::notify::Notifier;

/// What a run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nobody is out; nothing was sent
    NoAbsences,
    /// A message listing `count` absentees was delivered
    Notified { count: usize },
}

/// Fetch absentees for `date` and notify when there are any.
///
/// The notifier is not called at all for an empty day.
pub async fn run<A, N>(api: &mut A, notifier: &N, date: NaiveDate) -> Result<Outcome>
where
    A: AbsenceApi + ?Sized,
    N: Notifier + ?Sized,
{
    let mut absentees = api.absences_on(date).await?;

    if absentees.is_empty() {
        return Ok(Outcome::NoAbsences);
    }

    absentees.sort();
    let message = format_message(&absentees);
    debug!("formatted message for {} absentees", absentees.len());

    notifier.send(&message).await?;

    Ok(Outcome::Notified {
        count: absentees.len(),
    })
}

/// Render the Slack message for an already sorted list of names
pub fn format_message(absentees: &[String]) -> String {
    let mut message = format!(":x: *Out today* ({}):\n", absentees.len());
    for absentee in absentees {
        message.push_str("\n- ");
        message.push_str(absentee);
    }
    message
}
