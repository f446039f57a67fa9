use mo_core::onboarding::OnboardingEvent;
use mo_core::validation::BusinessDetailsForm;
use tokio::io::{AsyncBufRead, AsyncWrite};

use super::ScreenInput;
use crate::adapters::Terminal;

pub(crate) async fn details<R, W>(terminal: &Terminal<R, W>) -> anyhow::Result<ScreenInput>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    terminal.write_line("").await?;
    terminal.write_line("Business Details").await?;
    terminal
        .write_line("Please fill in your business information")
        .await?;

    // normalized by the use case
    let form = BusinessDetailsForm {
        organization_name: field!(terminal, "Organization Name"),
        gstin: field!(terminal, "GSTIN Number"),
        address: field!(terminal, "Address"),
        city: field!(terminal, "City"),
        state: field!(terminal, "State"),
        pincode: field!(terminal, "Pincode"),
    };
    Ok(ScreenInput::Event(OnboardingEvent::SubmitBusinessDetails {
        form,
    }))
}
