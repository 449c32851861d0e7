pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
    pub mod gridmanager;
    pub mod curvemanager;
}

pub mod math {
    pub mod ulp;

    pub mod dataset {
        pub mod dataset;
        pub mod xpoints;
        pub mod doublesdataset;
    }

    pub mod curve {
        pub mod curve;
        pub mod polynomialcurve;
        pub mod sinewave;
        pub mod cosinewave;
        pub mod compositecurve;
    }

    pub mod integration {
        pub mod integrationside;
        pub mod integrationrule;
        pub mod integrationerror;
        pub mod integrator;
        pub mod parallelintegrator;
        pub mod director;
    }
}
