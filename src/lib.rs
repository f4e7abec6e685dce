pub mod configuration;

pub mod account {
    pub mod accounterror;
    pub mod security;
    pub mod credentialmanager;
    pub mod identityprovider;
    pub mod localidentityprovider;
    pub mod accountmanagementservice;
}

pub mod api {
    pub mod apierror;
    pub mod viewmodels;
    pub mod holidayrouter;
    pub mod accountrouter;
    pub mod router;
}

pub mod engine {
    pub mod country;
    pub mod holiday;
    pub mod countrycatalog;
    pub mod calendarcache;
    pub mod holidayengine;
}

pub mod manager {
    pub mod managererror;
}

pub mod time {
    pub mod daterange;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod weekdaybeforeholiday;
        pub mod easterrelatedholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod holidayerror;
        pub mod holidayrule;
        pub mod countrycalendar;
        pub mod holidaycalendarloader;
        pub mod holidayoracle;
    }
}
