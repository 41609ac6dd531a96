pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod temperature {
    pub mod unit;
}

pub mod thermocouple {
    pub mod coefficient;
    pub mod conversionerror;
    pub mod thermocouple;
    pub mod typee;
}
