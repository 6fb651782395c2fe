mod snowflake;
