use crate::handoff::HandoffPayload;
use crate::selection::DetailRequest;
use crate::session::PageRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ScheduleSearch(u64), // delay in milliseconds
    FetchPage(PageRequest),
    FetchDetail(DetailRequest),
    Handoff(HandoffPayload),
    Close,
    ScheduleClearMessage(u64), // delay in milliseconds
}
