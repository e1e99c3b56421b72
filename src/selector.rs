selector!(CssStr);

pub static DATE_INPUT: CssStr = CssStr(r#"input[name="Appointment_Date__c"]"#);
pub static TIME_INPUT: CssStr = CssStr(r#"input[name="Event_Session__c"]"#);
pub static SUBMIT_BUTTON: CssStr = CssStr("lightning-button");

pub static UNAVAILABLE_BANNER: CssStr = CssStr("h1");
pub static NO_TIMESLOTS_NOTICE: CssStr =
    CssStr(".slds-m-bottom_small.slds-text-color_error.slds-text-title_bold");

pub static OPTION_LIST_FORMAT: CssStr = CssStr(r#"#{} > [role="option"]"#);
