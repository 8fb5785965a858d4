//! Blink tasks: each one toggles a single group between its color and off.

use embassy_time::Timer;

use crate::cancel::CancellationToken;
use crate::pattern::Group;
use crate::{OFF, Rgb, SharedPort, StripPort};

/// Drive one group until `token` is signaled.
///
/// Each iteration stages the group's color, pushes a frame, sleeps one
/// half-period, then does the same with the off color. The token is checked
/// only at half-period boundaries, so worst-case stop latency is one
/// half-period and at most one extra frame write (an off frame) happens
/// after a stop. The group is always left dark on exit.
///
/// A failed frame push cancels the token, so sibling tasks of the same
/// preset stop within one of their own half-periods.
pub async fn blink_group<S: StripPort>(
    port: &SharedPort<S>,
    group: &Group<'_>,
    token: &CancellationToken,
) -> Result<(), S::Error> {
    let half_period = group.half_period();
    while !token.is_cancelled() {
        write_group(port, group, group.color, token).await?;
        Timer::after(half_period).await;
        if token.is_cancelled() {
            // Stopped mid-phase: push one off frame so the group goes dark.
            write_group(port, group, OFF, token).await?;
            return Ok(());
        }
        write_group(port, group, OFF, token).await?;
        Timer::after(half_period).await;
    }
    Ok(())
}

/// Blink task slot: unoccupied slots resolve immediately.
///
/// Lets the conductor run a fixed-size array of task futures for a preset
/// with fewer groups than slots.
pub(crate) async fn blink_slot<S: StripPort>(
    port: &SharedPort<S>,
    group: Option<&Group<'_>>,
    token: &CancellationToken,
) -> Result<(), S::Error> {
    match group {
        Some(group) => blink_group(port, group, token).await,
        None => Ok(()),
    }
}

/// Stage `color` on every index of the group and push the frame.
///
/// Cancels the token on a device failure before propagating it.
async fn write_group<S: StripPort>(
    port: &SharedPort<S>,
    group: &Group<'_>,
    color: Rgb,
    token: &CancellationToken,
) -> Result<(), S::Error> {
    let mut port = port.lock().await;
    for &index in group.indices {
        port.set_pixel(index as usize, color);
    }
    let result = port.push_frame();
    if result.is_err() {
        token.cancel();
    }
    result
}
