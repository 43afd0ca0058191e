mod chart_payload;
